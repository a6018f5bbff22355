use clap::Parser;
use iced::keyboard::{self, key};
use iced::widget::{column, container, image, scrollable};
use iced::{Element, Length, Subscription, Task, Theme};
use tracing_subscriber::EnvFilter;

mod assets;
mod config;
mod error;
mod state;
mod ui;

use assets::{load_thumbnail, AssetResolver, Thumbnail};
use config::{Cli, Config};
use error::AssetError;
use state::{Catalog, Gallery, GalleryImage, History, MemoryHistory, OverlayTarget, Page, Router};
use ui::{Screen, ThumbnailState};

/// Main application state
struct Portfolio {
    /// Current page, kept in sync with the history
    router: Router<MemoryHistory>,
    /// Both gallery sequences (read-only)
    catalog: Catalog,
    /// Maps gallery sources to files
    resolver: AssetResolver,
    /// The view mounted for the current page
    screen: Screen,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A navigation link or button was pressed
    Navigate(Page),
    /// Back/forward through the history (toolbar buttons or Alt+Left/Right)
    HistoryBack,
    HistoryForward,
    /// A gallery card was clicked
    SelectImage(GalleryImage),
    /// A click landed on the open detail overlay, or Escape was pressed
    Overlay(OverlayTarget),
    /// Background thumbnail decoding finished
    ThumbnailLoaded {
        gallery: Gallery,
        id: u32,
        result: Result<image::Handle, AssetError>,
    },
}

impl Portfolio {
    /// Create a new instance of the application
    fn new(config: Config, catalog: Catalog) -> (Self, Task<Message>) {
        let router = Router::new(MemoryHistory::new(config.start_path));
        let resolver = AssetResolver::new(config.asset_root, config.asset_base);

        tracing::info!(
            path = router.current_path(),
            page = ?router.current_page(),
            assets = %resolver.root().display(),
            "Portfolio initialized"
        );

        let portfolio = Portfolio {
            screen: Screen::for_page(router.current_page()),
            router,
            catalog,
            resolver,
        };
        let task = portfolio.load_thumbnails();

        (portfolio, task)
    }

    fn title(&self) -> String {
        format!("Jasper Smith | {}", self.router.current_page().label())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(page) => {
                self.router.navigate_to(page);
                self.sync_screen()
            }
            Message::HistoryBack => {
                if self.router.history_mut().back() {
                    self.sync_screen()
                } else {
                    Task::none()
                }
            }
            Message::HistoryForward => {
                if self.router.history_mut().forward() {
                    self.sync_screen()
                } else {
                    Task::none()
                }
            }
            Message::SelectImage(image) => {
                if let Screen::Gallery(gallery) = &mut self.screen {
                    gallery.selection.select(image);
                }
                Task::none()
            }
            Message::Overlay(target) => {
                if let Screen::Gallery(gallery) = &mut self.screen {
                    gallery.selection.click(target);
                }
                Task::none()
            }
            Message::ThumbnailLoaded {
                gallery,
                id,
                result,
            } => {
                match &mut self.screen {
                    Screen::Gallery(screen) if screen.gallery == gallery => {
                        let state = match result {
                            Ok(handle) => ThumbnailState::Ready(handle),
                            Err(e) => {
                                tracing::warn!(%gallery, id, "Thumbnail unavailable: {}", e);
                                ThumbnailState::Failed
                            }
                        };
                        screen.thumbnails.insert(id, state);
                    }
                    // The gallery was left before decoding finished
                    _ => tracing::trace!(%gallery, id, "Dropping late thumbnail"),
                }
                Task::none()
            }
        }
    }

    /// Remount the screen if the router moved to a different page
    fn sync_screen(&mut self) -> Task<Message> {
        let page = self.router.current_page();
        if self.screen.page() == page {
            return Task::none();
        }

        tracing::debug!(from = ?self.screen.page(), to = ?page, "Mounting page");
        self.screen = Screen::for_page(page);
        self.load_thumbnails()
    }

    /// Start decoding thumbnails for the mounted gallery, if any
    fn load_thumbnails(&self) -> Task<Message> {
        let Screen::Gallery(screen) = &self.screen else {
            return Task::none();
        };
        let gallery = screen.gallery;

        let tasks: Vec<Task<Message>> = self
            .catalog
            .images(gallery)
            .iter()
            .map(|artwork| {
                let id = artwork.id;
                match self.resolver.resolve(&artwork.source) {
                    Ok(path) => Task::perform(load_thumbnail(path), move |result| {
                        Message::ThumbnailLoaded {
                            gallery,
                            id,
                            result: result.map(into_handle),
                        }
                    }),
                    Err(e) => Task::done(Message::ThumbnailLoaded {
                        gallery,
                        id,
                        result: Err(e),
                    }),
                }
            })
            .collect();

        Task::batch(tasks)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let history = self.router.history();
        let nav = ui::nav::view(
            self.router.current_page(),
            self.router.current_path(),
            history.can_go_back(),
            history.can_go_forward(),
        );

        let content: Element<Message> = match &self.screen {
            Screen::Home => scrollable(ui::home::view(
                self.resolver.resolve(ui::home::PROFILE_IMAGE).ok(),
            ))
            .into(),
            Screen::About => scrollable(ui::about::view(
                self.resolver.resolve(ui::about::PORTRAIT_IMAGE).ok(),
            ))
            .into(),
            Screen::Gallery(screen) => ui::gallery::view(
                screen,
                self.catalog.images(screen.gallery),
                &self.resolver,
            ),
        };

        container(column![nav, content])
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Browser-style history shortcuts, and Escape to close the overlay
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|pressed, modifiers| match pressed.as_ref() {
            keyboard::Key::Named(key::Named::ArrowLeft) if modifiers.alt() => {
                Some(Message::HistoryBack)
            }
            keyboard::Key::Named(key::Named::ArrowRight) if modifiers.alt() => {
                Some(Message::HistoryForward)
            }
            keyboard::Key::Named(key::Named::Escape) => {
                Some(Message::Overlay(OverlayTarget::CloseButton))
            }
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn into_handle(thumbnail: Thumbnail) -> image::Handle {
    image::Handle::from_rgba(thumbnail.width, thumbnail.height, thumbnail.pixels)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jasper_portfolio=info")),
        )
        .init();

    let config = Config::from(Cli::parse());

    let catalog = match &config.catalog {
        Some(path) => Catalog::from_path(path),
        None => Catalog::builtin(),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Cannot load gallery catalog: {}", e);
            std::process::exit(1);
        }
    };

    iced::application(Portfolio::title, Portfolio::update, Portfolio::view)
        .subscription(Portfolio::subscription)
        .theme(Portfolio::theme)
        .centered()
        .run_with(move || Portfolio::new(config, catalog))
}
