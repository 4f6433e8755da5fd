/// Meta Graph API client for the Ads Manager screen
///
/// Thin fetch collaborator: pulls campaigns, ad sets, ads, and per-level
/// insights for one ad account and hands the core a wholesale
/// [`AdsSnapshot`]. Retry, cancellation, and staleness policy live here
/// (or in callers), never in the selection/filter core, which a failed
/// fetch must not touch.
use async_trait::async_trait;
use merchdesk_core::{
    Ad, AdSet, AdsApiError, AdsApiResult, AdsDataSource, AdsSnapshot, Campaign, GraphApiConfig,
    Insight,
};
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Envelope the Graph API wraps every collection response in.
#[derive(Debug, Deserialize)]
struct Paged<T> {
    data: Vec<T>,
}

/// One insights row; the entity id rides alongside the metric fields under
/// a per-level key.
#[derive(Debug, Deserialize)]
struct InsightRow {
    #[serde(alias = "campaign_id", alias = "adset_id", alias = "ad_id")]
    id: String,
    #[serde(flatten)]
    insight: Insight,
}

pub struct GraphClient {
    http: reqwest::Client,
    base_url: String,
    api_version: String,
    ad_account_id: String,
    access_token: String,
    page_size: u32,
}

impl GraphClient {
    /// Build a client from config, reading the access token from the
    /// configured environment variable.
    pub fn new(config: &GraphApiConfig, page_size: u32) -> AdsApiResult<Self> {
        let access_token = std::env::var(&config.access_token_env).map_err(|_| {
            AdsApiError::AuthenticationError(format!(
                "access token env var {} not set",
                config.access_token_env
            ))
        })?;
        if config.ad_account_id.is_empty() {
            return Err(AdsApiError::ConfigError("api.ad_account_id is empty".into()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_version: config.api_version.clone(),
            ad_account_id: config.ad_account_id.clone(),
            access_token,
            page_size,
        })
    }

    fn account_url(&self, edge: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url, self.api_version, self.ad_account_id, edge
        )
    }

    async fn get_collection<T: serde::de::DeserializeOwned>(
        &self,
        edge: &str,
        fields: &str,
        extra: &[(&str, &str)],
    ) -> AdsApiResult<Vec<T>> {
        let limit = self.page_size.to_string();
        let mut query: Vec<(&str, &str)> = vec![
            ("fields", fields),
            ("limit", &limit),
            ("access_token", &self.access_token),
        ];
        query.extend_from_slice(extra);

        let response = self
            .http
            .get(self.account_url(edge))
            .query(&query)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(AdsApiError::AuthenticationError(format!(
                    "{} request rejected",
                    edge
                )));
            }
            StatusCode::TOO_MANY_REQUESTS => return Err(AdsApiError::RateLimited),
            status => {
                let body = response.text().await.unwrap_or_default();
                return Err(AdsApiError::ApiError(format!("{edge}: {status}: {body}")));
            }
        }

        let page: Paged<T> = response.json().await?;
        Ok(page.data)
    }

    async fn get_insights(&self, level: &str) -> AdsApiResult<HashMap<String, Insight>> {
        let fields = format!("{level}_id,spend,reach,impressions,clicks,actions");
        let rows: Vec<InsightRow> = self
            .get_collection("insights", &fields, &[("level", level)])
            .await?;
        Ok(rows.into_iter().map(|row| (row.id, row.insight)).collect())
    }

    pub async fn fetch_campaigns(&self) -> AdsApiResult<Vec<Campaign>> {
        self.get_collection(
            "campaigns",
            "id,name,status,objective,created_time,daily_budget,lifetime_budget",
            &[],
        )
        .await
    }

    pub async fn fetch_ad_sets(&self) -> AdsApiResult<Vec<AdSet>> {
        self.get_collection(
            "adsets",
            "id,campaign_id,name,status,bid_strategy,daily_budget,lifetime_budget,start_time,end_time",
            &[],
        )
        .await
    }

    pub async fn fetch_ads(&self) -> AdsApiResult<Vec<Ad>> {
        self.get_collection("ads", "id,adset_id,name,status,creative", &[])
            .await
    }
}

#[async_trait]
impl AdsDataSource for GraphClient {
    async fn fetch_snapshot(&self) -> AdsApiResult<AdsSnapshot> {
        tracing::info!(account = %self.ad_account_id, "fetching ads snapshot");

        let (campaigns, ad_sets, ads, campaign_insights, ad_set_insights, ad_insights) =
            tokio::try_join!(
                self.fetch_campaigns(),
                self.fetch_ad_sets(),
                self.fetch_ads(),
                self.get_insights("campaign"),
                self.get_insights("adset"),
                self.get_insights("ad"),
            )?;

        tracing::debug!(
            campaigns = campaigns.len(),
            ad_sets = ad_sets.len(),
            ads = ads.len(),
            "snapshot fetched"
        );
        Ok(AdsSnapshot {
            campaigns,
            ad_sets,
            ads,
            campaign_insights,
            ad_set_insights,
            ad_insights,
        })
    }
}
