//! The worksheet handle: opened by name once, then appended to per request.

use std::path::PathBuf;

use async_trait::async_trait;
use loom_core::{CoreError, SubmissionSink};
use serde::Deserialize;

use crate::credentials::ServiceAccountKey;
use crate::error::{ensure_success, SheetsError};
use crate::token::TokenProvider;

// ---------------------------------------------------------------------------
// SheetsConfig
// ---------------------------------------------------------------------------

/// Default location of the service-account key file.
const DEFAULT_CREDENTIALS_PATH: &str = "secrets/credentials.json";

const DEFAULT_SPREADSHEET_NAME: &str = "Influencer Submissions";

const DEFAULT_WORKSHEET_NAME: &str = "Sheet1";

/// Google Drive v3 API root.
pub const DEFAULT_DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Google Sheets v4 API root.
pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";

const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

/// Where the submissions spreadsheet lives and how to reach it.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// Path to the service-account JSON key.
    pub credentials_path: PathBuf,
    /// Spreadsheet title, resolved through Drive.
    pub spreadsheet_name: String,
    /// Tab inside the spreadsheet that receives rows.
    pub worksheet_name: String,
    pub drive_api_base: String,
    pub sheets_api_base: String,
}

impl SheetsConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable                  | Default                    |
    /// |---------------------------|----------------------------|
    /// | `GOOGLE_CREDENTIALS_PATH` | `secrets/credentials.json` |
    /// | `SPREADSHEET_NAME`        | `Influencer Submissions`   |
    /// | `WORKSHEET_NAME`          | `Sheet1`                   |
    pub fn from_env() -> Self {
        Self {
            credentials_path: std::env::var("GOOGLE_CREDENTIALS_PATH")
                .unwrap_or_else(|_| DEFAULT_CREDENTIALS_PATH.to_string())
                .into(),
            spreadsheet_name: std::env::var("SPREADSHEET_NAME")
                .unwrap_or_else(|_| DEFAULT_SPREADSHEET_NAME.to_string()),
            worksheet_name: std::env::var("WORKSHEET_NAME")
                .unwrap_or_else(|_| DEFAULT_WORKSHEET_NAME.to_string()),
            drive_api_base: DEFAULT_DRIVE_API_BASE.to_string(),
            sheets_api_base: DEFAULT_SHEETS_API_BASE.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// API payloads
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Deserialize)]
struct DriveFile {
    id: String,
}

#[derive(Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Deserialize)]
struct SheetProperties {
    title: String,
}

// ---------------------------------------------------------------------------
// Worksheet
// ---------------------------------------------------------------------------

/// An authenticated handle on one worksheet of one spreadsheet.
///
/// Built once at startup by [`Worksheet::connect`] and shared by every
/// request for the life of the process.
pub struct Worksheet {
    http: reqwest::Client,
    tokens: TokenProvider,
    sheets_api_base: String,
    spreadsheet_id: String,
    title: String,
}

impl Worksheet {
    /// Authenticate, find the spreadsheet by name, and check that the
    /// worksheet exists.
    pub async fn connect(config: &SheetsConfig) -> Result<Self, SheetsError> {
        tracing::info!(
            path = %config.credentials_path.display(),
            "Loading spreadsheet credentials"
        );
        let key = ServiceAccountKey::from_file(&config.credentials_path)?;

        let http = reqwest::Client::new();
        let tokens = TokenProvider::new(key, http.clone())?;

        let spreadsheet_id =
            find_spreadsheet(&http, &tokens, &config.drive_api_base, &config.spreadsheet_name)
                .await?;

        let titles =
            worksheet_titles(&http, &tokens, &config.sheets_api_base, &spreadsheet_id).await?;
        if !titles.iter().any(|t| t == &config.worksheet_name) {
            return Err(SheetsError::WorksheetNotFound {
                spreadsheet: config.spreadsheet_name.clone(),
                worksheet: config.worksheet_name.clone(),
            });
        }

        tracing::info!(
            spreadsheet = %config.spreadsheet_name,
            worksheet = %config.worksheet_name,
            %spreadsheet_id,
            "Connected to spreadsheet"
        );

        Ok(Self {
            http,
            tokens,
            sheets_api_base: config.sheets_api_base.clone(),
            spreadsheet_id,
            title: config.worksheet_name.clone(),
        })
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Append `row` after the last non-empty row of the worksheet.
    pub async fn append_row(&self, row: &[String]) -> Result<(), SheetsError> {
        let token = self.tokens.access_token().await?;
        let range = format!("{}:append", quoted_range(&self.title));
        let url = api_url(
            &self.sheets_api_base,
            &["spreadsheets", &self.spreadsheet_id, "values", &range],
        )?;

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&serde_json::json!({ "values": [row] }))
            .send()
            .await?;
        ensure_success(response).await?;

        tracing::debug!(worksheet = %self.title, columns = row.len(), "Row appended");
        Ok(())
    }
}

#[async_trait]
impl SubmissionSink for Worksheet {
    async fn append(&self, row: &[String]) -> Result<(), CoreError> {
        Ok(self.append_row(row).await?)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Look up a spreadsheet id by title; the first match wins.
async fn find_spreadsheet(
    http: &reqwest::Client,
    tokens: &TokenProvider,
    drive_api_base: &str,
    name: &str,
) -> Result<String, SheetsError> {
    let token = tokens.access_token().await?;
    let query = format!(
        "name = '{}' and mimeType = '{SPREADSHEET_MIME_TYPE}' and trashed = false",
        name.replace('\\', "\\\\").replace('\'', "\\'")
    );

    let response = http
        .get(api_url(drive_api_base, &["files"])?)
        .bearer_auth(token)
        .query(&[
            ("q", query.as_str()),
            ("fields", "files(id,name)"),
            ("supportsAllDrives", "true"),
            ("includeItemsFromAllDrives", "true"),
        ])
        .send()
        .await?;
    let list: FileList = ensure_success(response).await?.json().await?;

    list.files
        .into_iter()
        .next()
        .map(|file| file.id)
        .ok_or_else(|| SheetsError::SpreadsheetNotFound(name.to_string()))
}

async fn worksheet_titles(
    http: &reqwest::Client,
    tokens: &TokenProvider,
    sheets_api_base: &str,
    spreadsheet_id: &str,
) -> Result<Vec<String>, SheetsError> {
    let token = tokens.access_token().await?;

    let response = http
        .get(api_url(sheets_api_base, &["spreadsheets", spreadsheet_id])?)
        .bearer_auth(token)
        .query(&[("fields", "sheets.properties.title")])
        .send()
        .await?;
    let meta: SpreadsheetMeta = ensure_success(response).await?.json().await?;

    Ok(meta
        .sheets
        .into_iter()
        .map(|sheet| sheet.properties.title)
        .collect())
}

/// A1-notation range covering a whole sheet, e.g. `'Sheet1'`.
fn quoted_range(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

/// Join percent-encoded path segments onto an API root.
fn api_url(base: &str, segments: &[&str]) -> Result<reqwest::Url, SheetsError> {
    let mut url =
        reqwest::Url::parse(base).map_err(|e| SheetsError::InvalidUrl(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| SheetsError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
