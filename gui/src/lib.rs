/// Merchdesk GUI - Native operator dashboard using Iced
pub mod ads_manager;
pub mod graph_client;

pub use ads_manager::{
    update as ads_manager_update, view as ads_manager_view, AdsManagerMessage, AdsManagerState,
};
pub use graph_client::GraphClient;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
