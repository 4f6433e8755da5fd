use iced::widget::container;
use iced::{window, Element, Length, Size, Theme};
use std::sync::Arc;

use merchdesk_core::{AdsDataSource, DashboardConfig};
use merchdesk_gui::ads_manager::{self, AdsManagerMessage, AdsManagerState};
use merchdesk_gui::graph_client::GraphClient;

fn main() -> iced::Result {
    let config = DashboardConfig::load_or_default().unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(config.logging.filter.clone())
        .init();

    tracing::info!("Starting Merchdesk dashboard");

    iced::application("Merchdesk", MerchdeskApp::update, MerchdeskApp::view)
        .window(window::Settings {
            size: Size::new(1400.0, 900.0),
            position: window::Position::Centered,
            min_size: Some(Size::new(1000.0, 700.0)),
            ..Default::default()
        })
        .theme(|_| Theme::TokyoNight)
        .run_with(move || (MerchdeskApp::new(config.clone()), iced::Task::none()))
}

/// Main application state
struct MerchdeskApp {
    /// Ads Manager screen state
    ads_manager: AdsManagerState,
    /// Graph API client, absent when no access token is configured
    client: Option<Arc<GraphClient>>,
}

/// Messages that drive the application
#[derive(Debug, Clone)]
enum Message {
    /// Ads Manager message
    AdsManager(AdsManagerMessage),
}

impl MerchdeskApp {
    fn new(config: DashboardConfig) -> Self {
        let client = match GraphClient::new(&config.api, config.ads.page_size) {
            Ok(client) => Some(Arc::new(client)),
            Err(err) => {
                tracing::warn!("Graph API client unavailable: {}", err);
                None
            }
        };

        let mut ads_manager = AdsManagerState::new();
        if client.is_none() {
            ads_manager.error = Some("Graph API not configured".to_string());
        }

        Self {
            ads_manager,
            client,
        }
    }

    fn update(&mut self, message: Message) -> iced::Task<Message> {
        match message {
            Message::AdsManager(msg) => {
                let refresh = matches!(msg, AdsManagerMessage::RefreshRequested);
                ads_manager::update(&mut self.ads_manager, msg);

                if refresh {
                    if let Some(client) = &self.client {
                        let client = Arc::clone(client);
                        return iced::Task::perform(
                            async move {
                                client
                                    .fetch_snapshot()
                                    .await
                                    .map_err(|err| err.to_string())
                            },
                            |result| match result {
                                Ok(snapshot) => {
                                    Message::AdsManager(AdsManagerMessage::SnapshotLoaded(snapshot))
                                }
                                Err(err) => Message::AdsManager(AdsManagerMessage::LoadError(err)),
                            },
                        );
                    }
                    return iced::Task::done(Message::AdsManager(AdsManagerMessage::LoadError(
                        "Graph API not configured".to_string(),
                    )));
                }
                iced::Task::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        container(ads_manager::view(&self.ads_manager).map(Message::AdsManager))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
