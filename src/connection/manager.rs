//! HTTP client for the transfer backend.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::{ConnectionConfig, Delimiter, FileSelection, PreviewResult, TokenPayload};

use super::types::{
    ColumnInfo, ErrorBody, ExportRequest, JoinRequest, JoinResponse, PreviewResponse,
    SchemaResponse, TablePreviewRequest, TableRequest, TablesResponse, TokenResponse,
    TransferSummary, UploadRequest, WithConnection, endpoints,
};

/// Talks to the backend that does the actual ClickHouse and CSV work.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client with the HTTP client's default timeouts.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(format!("clickbridge/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self { http: builder.build()?, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("POST /{path}");
        let response = self.http.post(self.endpoint(path)).json(body).send().await?;
        Self::decode(response).await
    }

    /// Any non-2xx status is a failure; the body's `error` field carries the reason.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.json::<ErrorBody>().await.ok().and_then(|body| body.error);
            return Err(Error::Backend { status: status.as_u16(), message });
        }
        Ok(response.json::<T>().await?)
    }

    async fn file_part(file: &FileSelection) -> Result<Part> {
        let bytes = tokio::fs::read(file.path()).await?;
        Ok(Part::bytes(bytes).file_name(file.name.clone()))
    }

    /// Test the connection and list the tables of the configured database.
    pub async fn connect(&self, connection: &ConnectionConfig) -> Result<Vec<String>> {
        let response: TablesResponse = self.post_json(endpoints::CONNECT, connection).await?;
        Ok(response.tables)
    }

    pub async fn table_schema(
        &self,
        connection: &ConnectionConfig,
        table: &str,
    ) -> Result<Vec<ColumnInfo>> {
        let body = TableRequest { table };
        let response: SchemaResponse = self
            .post_json(endpoints::TABLE_SCHEMA, &WithConnection { connection, body: &body })
            .await?;
        response
            .schema
            .ok_or_else(|| Error::UnexpectedResponse(format!("no schema returned for {table}")))
    }

    /// Column names of `table`, in table order.
    pub async fn table_columns(
        &self,
        connection: &ConnectionConfig,
        table: &str,
    ) -> Result<Vec<String>> {
        let schema = self.table_schema(connection, table).await?;
        Ok(schema.into_iter().map(|column| column.name).collect())
    }

    pub async fn preview_table(
        &self,
        connection: &ConnectionConfig,
        table: &str,
        columns: &[String],
    ) -> Result<PreviewResult> {
        let body = TablePreviewRequest { table, columns };
        let response: PreviewResponse = self
            .post_json(endpoints::PREVIEW_TABLE, &WithConnection { connection, body: &body })
            .await?;
        response.into_preview()
    }

    pub async fn preview_file(
        &self,
        file: &FileSelection,
        delimiter: Delimiter,
    ) -> Result<PreviewResult> {
        let form = Form::new()
            .part("file", Self::file_part(file).await?)
            .text("delimiter", delimiter.as_str());

        log::debug!("POST /{} ({})", endpoints::PREVIEW_FILE, file.name);
        let response =
            self.http.post(self.endpoint(endpoints::PREVIEW_FILE)).multipart(form).send().await?;
        let response: PreviewResponse = Self::decode(response).await?;
        response.into_preview()
    }

    /// Upload a file for ingestion. The file travels as multipart; everything else
    /// goes in the query string.
    pub async fn upload_file(
        &self,
        connection: &ConnectionConfig,
        request: &UploadRequest,
    ) -> Result<TransferSummary> {
        let mut url = Url::parse(&self.endpoint(endpoints::UPLOAD))
            .map_err(|e| Error::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("host", &connection.host)
            .append_pair("port", &connection.port)
            .append_pair("database", &connection.database)
            .append_pair("user", &connection.user)
            .append_pair("password", &connection.password)
            .append_pair("token", &connection.token)
            .append_pair("delimiter", request.delimiter.as_str())
            .append_pair("table", &request.table)
            .append_pair("columns", &request.columns.join(","));

        let form = Form::new().part("file", Self::file_part(&request.file).await?);

        log::debug!("POST /{} ({} -> {})", endpoints::UPLOAD, request.file.name, request.table);
        let response = self.http.post(url).multipart(form).send().await?;
        Self::decode(response).await
    }

    pub async fn export_table(
        &self,
        connection: &ConnectionConfig,
        request: &ExportRequest,
    ) -> Result<TransferSummary> {
        self.post_json(endpoints::EXPORT, &WithConnection { connection, body: request }).await
    }

    pub async fn join_tables(
        &self,
        connection: &ConnectionConfig,
        request: &JoinRequest,
    ) -> Result<JoinResponse> {
        self.post_json(endpoints::JOIN, &WithConnection { connection, body: request }).await
    }

    /// Ask the backend to sign a token for `payload`.
    pub async fn generate_token(&self, payload: &TokenPayload) -> Result<String> {
        let response: TokenResponse = self.post_json(endpoints::TOKEN, payload).await?;
        response
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::UnexpectedResponse("no token returned".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = BackendClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.endpoint(endpoints::CONNECT), "http://localhost:5000/connect_clickhouse");
    }

    #[test]
    fn rejects_unparsable_base_url() {
        assert!(matches!(BackendClient::new("not a url"), Err(Error::InvalidUrl(_))));
    }
}
