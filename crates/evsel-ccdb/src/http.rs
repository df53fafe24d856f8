use async_trait::async_trait;
use reqwest::{StatusCode, header::HeaderMap, multipart};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use evsel_model::{
    CTP_CONFIG_PATH, CtpConfiguration, Metadata, RUN_INFORMATION_PATH, RunDuration, RunNumber,
    TRIGGER_ALIASES_PATH, TimestampMs, TriggerAliases, ValidityWindow,
};

use crate::{config::CcdbConfig, errors::CcdbError, store::ConditionsStore};

const SOR_HEADER: &str = "SOR";
const EOR_HEADER: &str = "EOR";
const BLOB_FIELD: &str = "blob";

/// CCDB REST client.
///
/// One `reqwest::Client` is shared by all calls; requests are issued one at a time
/// by the caller and are never retried.
pub struct HttpStore {
    client: reqwest::Client,
    config: CcdbConfig,
}

impl HttpStore {
    pub fn new(config: CcdbConfig) -> Result<Self, CcdbError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("evsel-uploader/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: CcdbConfig) -> Self {
        Self { client, config }
    }

    pub fn endpoint(&self) -> &str {
        self.config.base_url()
    }

    /// Fetch the object stored under `path` valid at `timestamp`.
    #[instrument(level = "debug", skip(self, metadata))]
    pub async fn retrieve<T>(
        &self,
        path: &str,
        metadata: &Metadata,
        timestamp: TimestampMs,
    ) -> Result<Option<T>, CcdbError>
    where
        T: DeserializeOwned,
    {
        let url = format!(
            "{}/{}/{}{}",
            self.endpoint(),
            path,
            timestamp,
            metadata_suffix(metadata)
        );
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(%url, "object not found");
            return Ok(None);
        }
        check_status(path, response.status())?;

        let body = response.text().await?;
        let object = serde_json::from_str(&body).map_err(|e| {
            CcdbError::InvalidResponse(format!("failed to parse {path}: {e}, body: {body}"))
        })?;
        Ok(Some(object))
    }

    /// Upload `object` under `path`, valid over `window`.
    #[instrument(level = "debug", skip(self, object, metadata), fields(start = window.start(), end = window.end()))]
    pub async fn store<T>(
        &self,
        object: &T,
        path: &str,
        metadata: &Metadata,
        window: ValidityWindow,
    ) -> Result<(), CcdbError>
    where
        T: Serialize + ?Sized,
    {
        let url = format!(
            "{}/{}/{}/{}{}",
            self.endpoint(),
            path,
            window.start(),
            window.end(),
            metadata_suffix(metadata)
        );
        let blob = serde_json::to_vec(object).map_err(CcdbError::Serialize)?;
        let part = multipart::Part::bytes(blob)
            .file_name(blob_file_name(path))
            .mime_str("application/json")?;
        let form = multipart::Form::new().part(BLOB_FIELD, part);

        let response = self.client.post(&url).multipart(form).send().await?;
        check_status(path, response.status())?;

        debug!(%url, "object stored");
        Ok(())
    }
}

#[async_trait]
impl ConditionsStore for HttpStore {
    async fn run_duration(&self, run: RunNumber) -> Result<RunDuration, CcdbError> {
        let url = format!("{}/{}/{}", self.endpoint(), RUN_INFORMATION_PATH, run);
        let response = self.client.head(&url).send().await?;

        if !response.status().is_success() {
            return Err(CcdbError::RunDurationUnavailable {
                run,
                reason: format!("status {}", response.status().as_u16()),
            });
        }

        let headers = response.headers();
        let sor = timestamp_header(headers, SOR_HEADER)
            .map_err(|reason| CcdbError::RunDurationUnavailable { run, reason })?;
        let eor = timestamp_header(headers, EOR_HEADER)
            .map_err(|reason| CcdbError::RunDurationUnavailable { run, reason })?;

        Ok(RunDuration { sor, eor })
    }

    async fn retrieve_ctp_config(
        &self,
        metadata: &Metadata,
        timestamp: TimestampMs,
    ) -> Result<Option<CtpConfiguration>, CcdbError> {
        self.retrieve(CTP_CONFIG_PATH, metadata, timestamp).await
    }

    async fn store_trigger_aliases(
        &self,
        aliases: &TriggerAliases,
        metadata: &Metadata,
        window: ValidityWindow,
    ) -> Result<(), CcdbError> {
        self.store(aliases, TRIGGER_ALIASES_PATH, metadata, window).await
    }
}

fn check_status(path: &str, status: StatusCode) -> Result<(), CcdbError> {
    if status.is_success() {
        return Ok(());
    }
    Err(CcdbError::Status {
        path: path.to_string(),
        status: status.as_u16(),
    })
}

/// `/key=value` segments appended to object URLs.
fn metadata_suffix(metadata: &Metadata) -> String {
    metadata
        .iter()
        .map(|(k, v)| format!("/{k}={v}"))
        .collect()
}

fn blob_file_name(path: &str) -> String {
    let leaf = path.rsplit('/').next().unwrap_or(path);
    format!("{leaf}.json")
}

fn timestamp_header(headers: &HeaderMap, name: &str) -> Result<TimestampMs, String> {
    let raw = headers
        .get(name)
        .ok_or_else(|| format!("missing {name} header"))?;
    raw.to_str()
        .map_err(|e| format!("non-ascii {name} header: {e}"))?
        .trim()
        .parse()
        .map_err(|e| format!("invalid {name} header: {e}"))
}
