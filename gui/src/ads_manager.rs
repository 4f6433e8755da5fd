/// Meta Ads Manager GUI Component
///
/// Three-column management screen over the advertising hierarchy:
/// - Campaigns, Ad Sets, and Ads columns, each with its own status filter
///   and text search
/// - Three-level checkbox selection with parent/child propagation
/// - Select-all toggles over the currently visible rows
/// - Insight summaries (spend, impressions) per row
///
/// All propagation and filtering semantics live in merchdesk-core; this
/// module only routes messages and renders the derived views.
use iced::widget::{
    button, checkbox, column, container, pick_list, row, scrollable, text, text_input, Column,
    Space,
};
use iced::{color, Alignment, Color, Element, Length, Theme};
use merchdesk_core::{
    filtered_ad_sets, filtered_ads, filtered_campaigns, Ad, AdSet, AdsSnapshot, Campaign,
    EntityLevel, EntityStatus, EntityStore, FilterPatch, FilterState, Insight, SelectionCounts,
    SelectionEngine, StatusFilter,
};

/// State for the Ads Manager view
#[derive(Debug, Clone, Default)]
pub struct AdsManagerState {
    /// Current entity snapshot, replaced wholesale on refresh
    pub store: EntityStore,
    /// Per-level status/search filters
    pub filters: FilterState,
    /// Three-level checkbox selection
    pub selection: SelectionEngine,
    /// Loading state
    pub loading: bool,
    /// Error message from the last failed fetch
    pub error: Option<String>,
}

/// Messages for Ads Manager interactions
#[derive(Debug, Clone)]
pub enum AdsManagerMessage {
    /// Refresh requested (actual fetch is driven by the app shell)
    RefreshRequested,
    /// Snapshot fetched successfully
    SnapshotLoaded(AdsSnapshot),
    /// Error fetching the snapshot
    LoadError(String),
    /// Campaign checkbox toggled
    CampaignToggled(String, bool),
    /// Ad set checkbox toggled
    AdSetToggled {
        ad_set_id: String,
        campaign_id: String,
        selected: bool,
    },
    /// Ad checkbox toggled
    AdToggled {
        ad_id: String,
        ad_set_id: String,
        campaign_id: String,
        selected: bool,
    },
    /// Select-all toggle over the visible rows of one level
    SelectAllVisible(EntityLevel),
    /// Search term changed for one level
    SearchChanged(EntityLevel, String),
    /// Status filter changed for one level
    StatusFilterChanged(EntityLevel, StatusFilter),
    /// Reset all three filters
    ClearFilters,
    /// Drop the whole selection
    ClearSelection,
    /// Panel dismissed: reset selection and filters, keep the snapshot
    PanelClosed,
}

impl AdsManagerState {
    /// Create a new Ads Manager state
    pub fn new() -> Self {
        Self::default()
    }

    /// Campaigns currently visible under the campaign filter
    pub fn visible_campaigns(&self) -> Vec<&Campaign> {
        filtered_campaigns(&self.store, &self.filters)
    }

    /// Ad sets currently visible under the ad-set filter and the selected
    /// campaigns
    pub fn visible_ad_sets(&self) -> Vec<&AdSet> {
        filtered_ad_sets(&self.store, &self.filters, &self.selection)
    }

    /// Ads currently visible under the ad filter and the tiered
    /// campaign/ad-set fallback
    pub fn visible_ads(&self) -> Vec<&Ad> {
        filtered_ads(&self.store, &self.filters, &self.selection)
    }

    /// Ids of the visible rows at one level, for select-all
    pub fn visible_ids(&self, level: EntityLevel) -> Vec<String> {
        match level {
            EntityLevel::Campaigns => self
                .visible_campaigns()
                .iter()
                .map(|c| c.id.clone())
                .collect(),
            EntityLevel::AdSets => self.visible_ad_sets().iter().map(|a| a.id.clone()).collect(),
            EntityLevel::Ads => self.visible_ads().iter().map(|a| a.id.clone()).collect(),
        }
    }

    /// Per-level selection totals for the header badges
    pub fn selection_counts(&self) -> SelectionCounts {
        self.selection.counts()
    }

    /// Whether every visible row at the level is selected (header checkbox
    /// state)
    pub fn all_visible_selected(&self, level: EntityLevel) -> bool {
        let ids = self.visible_ids(level);
        !ids.is_empty()
            && ids.iter().all(|id| match level {
                EntityLevel::Campaigns => self.selection.is_campaign_selected(id),
                EntityLevel::AdSets => self.selection.is_ad_set_selected(id),
                EntityLevel::Ads => self.selection.is_ad_selected(id),
            })
    }
}

/// Update the Ads Manager state based on messages
pub fn update(state: &mut AdsManagerState, message: AdsManagerMessage) {
    match message {
        AdsManagerMessage::RefreshRequested => {
            state.loading = true;
            state.error = None;
        }
        AdsManagerMessage::SnapshotLoaded(snapshot) => {
            // Selection and filters deliberately survive the refresh
            state.store.replace(snapshot);
            state.loading = false;
        }
        AdsManagerMessage::LoadError(err) => {
            tracing::warn!("ads snapshot fetch failed: {}", err);
            state.error = Some(err);
            state.loading = false;
        }
        AdsManagerMessage::CampaignToggled(campaign_id, selected) => {
            state
                .selection
                .select_campaign(&state.store, &campaign_id, selected);
        }
        AdsManagerMessage::AdSetToggled {
            ad_set_id,
            campaign_id,
            selected,
        } => {
            state
                .selection
                .select_ad_set(&state.store, &ad_set_id, &campaign_id, selected);
        }
        AdsManagerMessage::AdToggled {
            ad_id,
            ad_set_id,
            campaign_id,
            selected,
        } => {
            state
                .selection
                .select_ad(&ad_id, &ad_set_id, &campaign_id, selected);
        }
        AdsManagerMessage::SelectAllVisible(level) => {
            let visible = state.visible_ids(level);
            state
                .selection
                .select_all_visible(&state.store, level, &visible);
        }
        AdsManagerMessage::SearchChanged(level, term) => {
            state.filters.apply(level, FilterPatch::search(term));
        }
        AdsManagerMessage::StatusFilterChanged(level, status) => {
            state.filters.apply(level, FilterPatch::status(status));
        }
        AdsManagerMessage::ClearFilters => {
            state.filters.clear();
        }
        AdsManagerMessage::ClearSelection => {
            state.selection.clear();
        }
        AdsManagerMessage::PanelClosed => {
            state.selection.clear();
            state.filters.clear();
        }
    }
}

/// Render the Ads Manager view
pub fn view(state: &AdsManagerState) -> Element<AdsManagerMessage> {
    let header = view_header(state);

    let columns = row![
        view_campaign_column(state),
        view_ad_set_column(state),
        view_ad_column(state),
    ]
    .spacing(10)
    .width(Length::Fill)
    .height(Length::Fill);

    let content = column![header, columns]
        .spacing(15)
        .padding(10)
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the header with title, selection badges, and global actions
fn view_header(state: &AdsManagerState) -> Element<AdsManagerMessage> {
    let title = text("Meta Ads Manager").size(28);

    let counts = state.selection_counts();
    let badges = text(format!(
        "Selected: {} campaigns | {} ad sets | {} ads",
        counts.campaigns, counts.ad_sets, counts.ads
    ))
    .size(14);

    let refresh_btn = button(text(if state.loading { "Loading..." } else { "Refresh" }).size(14))
        .on_press(AdsManagerMessage::RefreshRequested)
        .padding(8);

    let clear_filters_btn = button(text("Clear Filters").size(14))
        .on_press(AdsManagerMessage::ClearFilters)
        .padding(8);

    let clear_selection_btn = button(text("Clear Selection").size(14))
        .on_press(AdsManagerMessage::ClearSelection)
        .padding(8);

    let mut header = Column::new().spacing(5);
    header = header.push(
        row![
            title,
            Space::with_width(Length::Fill),
            badges,
            clear_selection_btn,
            clear_filters_btn,
            refresh_btn,
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    );

    if let Some(err) = &state.error {
        header = header.push(
            container(text(format!("Fetch failed: {}", err)).size(13).color(color!(0xffffff)))
                .padding(6)
                .width(Length::Fill)
                .style(|_theme: &Theme| container::Style {
                    background: Some(color!(0xe74c3c).into()),
                    border: iced::Border {
                        width: 0.0,
                        color: Color::TRANSPARENT,
                        radius: 4.0.into(),
                    },
                    ..Default::default()
                }),
        );
    }

    container(header).width(Length::Fill).padding(10).into()
}

/// Render the filter controls shared by every column
fn view_column_controls<'a>(
    state: &'a AdsManagerState,
    level: EntityLevel,
    placeholder: &'a str,
) -> Element<'a, AdsManagerMessage> {
    let filter = state.filters.level(level);

    let search = text_input(placeholder, &filter.search)
        .on_input(move |term| AdsManagerMessage::SearchChanged(level, term))
        .padding(8)
        .width(Length::Fill);

    let status_picker = pick_list(
        StatusFilter::ALL_CHOICES,
        Some(filter.status),
        move |status| AdsManagerMessage::StatusFilterChanged(level, status),
    )
    .placeholder("Status");

    let select_all = checkbox("All", state.all_visible_selected(level))
        .on_toggle(move |_| AdsManagerMessage::SelectAllVisible(level));

    column![
        search,
        row![select_all, Space::with_width(Length::Fill), status_picker]
            .spacing(5)
            .align_y(Alignment::Center),
    ]
    .spacing(5)
    .into()
}

/// Render the campaigns column
fn view_campaign_column(state: &AdsManagerState) -> Element<AdsManagerMessage> {
    let controls = view_column_controls(state, EntityLevel::Campaigns, "Search campaigns...");

    let mut rows = Column::new().spacing(4).padding(5);
    for campaign in state.visible_campaigns() {
        let id = campaign.id.clone();
        let check = checkbox(
            campaign.name.clone(),
            state.selection.is_campaign_selected(&campaign.id),
        )
        .on_toggle(move |selected| AdsManagerMessage::CampaignToggled(id.clone(), selected));

        rows = rows.push(view_entity_row(
            check.into(),
            campaign.status,
            state.store.campaign_insights.get(&campaign.id),
        ));
    }

    view_column(
        "Campaigns",
        state.visible_campaigns().len(),
        controls,
        rows,
        color!(0x3498db),
    )
}

/// Render the ad sets column
fn view_ad_set_column(state: &AdsManagerState) -> Element<AdsManagerMessage> {
    let controls = view_column_controls(state, EntityLevel::AdSets, "Search ad sets...");

    let mut rows = Column::new().spacing(4).padding(5);
    for ad_set in state.visible_ad_sets() {
        let ad_set_id = ad_set.id.clone();
        let campaign_id = ad_set.campaign_id.clone();
        let check = checkbox(
            ad_set.name.clone(),
            state.selection.is_ad_set_selected(&ad_set.id),
        )
        .on_toggle(move |selected| AdsManagerMessage::AdSetToggled {
            ad_set_id: ad_set_id.clone(),
            campaign_id: campaign_id.clone(),
            selected,
        });

        rows = rows.push(view_entity_row(
            check.into(),
            ad_set.status,
            state.store.ad_set_insights.get(&ad_set.id),
        ));
    }

    view_column(
        "Ad Sets",
        state.visible_ad_sets().len(),
        controls,
        rows,
        color!(0xf39c12),
    )
}

/// Render the ads column
fn view_ad_column(state: &AdsManagerState) -> Element<AdsManagerMessage> {
    let controls = view_column_controls(state, EntityLevel::Ads, "Search ads...");

    let mut rows = Column::new().spacing(4).padding(5);
    for ad in state.visible_ads() {
        let ad_id = ad.id.clone();
        let ad_set_id = ad.ad_set_id.clone();
        // Campaign resolved transitively; a dangling chain still lets the
        // ad itself be toggled.
        let campaign_id = state
            .store
            .campaign_id_of_ad_set(&ad.ad_set_id)
            .unwrap_or_default()
            .to_string();
        let check = checkbox(ad.name.clone(), state.selection.is_ad_selected(&ad.id)).on_toggle(
            move |selected| AdsManagerMessage::AdToggled {
                ad_id: ad_id.clone(),
                ad_set_id: ad_set_id.clone(),
                campaign_id: campaign_id.clone(),
                selected,
            },
        );

        rows = rows.push(view_entity_row(
            check.into(),
            ad.status,
            state.store.ad_insights.get(&ad.id),
        ));
    }

    view_column(
        "Ads",
        state.visible_ads().len(),
        controls,
        rows,
        color!(0x2ecc71),
    )
}

/// Render one entity row: checkbox, status badge, insight summary
fn view_entity_row<'a>(
    check: Element<'a, AdsManagerMessage>,
    status: EntityStatus,
    insight: Option<&Insight>,
) -> Element<'a, AdsManagerMessage> {
    let badge = view_status_badge(status);

    let metrics = match insight {
        Some(i) => text(format!("${:.2} spent | {} impr", i.spend, i.impressions))
            .size(11)
            .color(color!(0x888888)),
        None => text("no insights").size(11).color(color!(0x666666)),
    };

    container(
        column![
            row![check, Space::with_width(Length::Fill), badge]
                .spacing(5)
                .align_y(Alignment::Center),
            metrics,
        ]
        .spacing(2),
    )
    .padding(6)
    .width(Length::Fill)
    .style(|_theme: &Theme| container::Style {
        background: Some(color!(0x2a2a2a).into()),
        border: iced::Border {
            width: 1.0,
            color: color!(0x404040),
            radius: 4.0.into(),
        },
        ..Default::default()
    })
    .into()
}

/// Render a status badge
fn view_status_badge(status: EntityStatus) -> Element<'static, AdsManagerMessage> {
    let (label, badge_color) = match status {
        EntityStatus::Active => ("ACTIVE", color!(0x2ecc71)),
        EntityStatus::Paused => ("PAUSED", color!(0xf39c12)),
        EntityStatus::Archived => ("ARCHIVED", color!(0x95a5a6)),
    };

    container(text(label).size(10).color(color!(0xffffff)))
        .padding(4)
        .style(move |_theme: &Theme| container::Style {
            background: Some(badge_color.into()),
            border: iced::Border {
                width: 0.0,
                color: Color::TRANSPARENT,
                radius: 3.0.into(),
            },
            ..Default::default()
        })
        .into()
}

/// Render one hierarchy column
fn view_column<'a>(
    title: &'a str,
    count: usize,
    controls: Element<'a, AdsManagerMessage>,
    rows: Column<'a, AdsManagerMessage>,
    accent: Color,
) -> Element<'a, AdsManagerMessage> {
    let header = container(
        row![
            text(title).size(16),
            Space::with_width(Length::Fill),
            text(format!("{}", count)).size(14),
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(8)
    .style(move |_theme: &Theme| container::Style {
        background: Some(accent.into()),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: iced::border::Radius {
                top_left: 4.0,
                top_right: 4.0,
                bottom_right: 0.0,
                bottom_left: 0.0,
            },
        },
        ..Default::default()
    });

    let body = scrollable(rows).height(Length::Fill).width(Length::Fill);

    let content = column![header, controls, body]
        .spacing(8)
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(5)
        .style(|_theme: &Theme| container::Style {
            background: Some(color!(0x1e1e1e).into()),
            border: iced::Border {
                width: 1.0,
                color: color!(0x404040),
                radius: 4.0.into(),
            },
            ..Default::default()
        })
        .into()
}
