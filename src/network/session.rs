use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT};
use thiserror::Error;

use crate::core::{parse_content_type, StarImageError, StarImageOptions, DEFAULT_USER_AGENT};
use crate::utils::url::Url;

/// 文档获取错误
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),
}

/// 大小探测错误
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("invalid content-length header: {0:?}")]
    InvalidContentLength(String),
}

/// 远程获取的文档内容
#[derive(Clone, Debug)]
pub struct FetchedDocument {
    pub data: Vec<u8>,
    /// `Content-Type` 头中声明的字符集（可能为空）
    pub charset: String,
}

/// HTTP 传输接口
///
/// 文档获取读取完整响应体；大小探测只读取响应头。
pub trait Transport {
    fn fetch_document(&self, url: &Url) -> Result<FetchedDocument, FetchError>;

    /// 返回响应声明的 content-length，没有该头时返回 `None`
    fn content_length(&self, url: &str) -> Result<Option<u64>, ProbeError>;
}

/// 基于 reqwest 阻塞客户端的 HTTP 会话
pub struct Session {
    client: Client,
}

impl Session {
    pub fn new(options: StarImageOptions) -> Result<Session, StarImageError> {
        let mut header_map = HeaderMap::new();
        let user_agent = options
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        header_map.insert(
            USER_AGENT,
            user_agent
                .parse()
                .map_err(|_| StarImageError::InvalidUserAgent(user_agent.clone()))?,
        );

        let mut builder = Client::builder()
            .danger_accept_invalid_certs(options.insecure)
            .default_headers(header_map);
        if options.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(options.timeout));
        }
        let client = builder.build()?;

        Ok(Session { client })
    }
}

impl Transport for Session {
    fn fetch_document(&self, url: &Url) -> Result<FetchedDocument, FetchError> {
        let response = self.client.get(url.as_str()).send()?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let charset = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|header| header.to_str().ok())
            .map(|content_type| parse_content_type(content_type).1)
            .unwrap_or_default();
        let data = response.bytes()?.to_vec();

        Ok(FetchedDocument {
            data,
            charset,
        })
    }

    fn content_length(&self, url: &str) -> Result<Option<u64>, ProbeError> {
        let response = self.client.head(url).send()?;

        if !response.status().is_success() {
            return Err(ProbeError::Status(response.status().as_u16()));
        }

        parse_content_length(response.headers())
    }
}

/// 从响应头中读取 content-length
pub fn parse_content_length(headers: &HeaderMap) -> Result<Option<u64>, ProbeError> {
    match headers.get(CONTENT_LENGTH) {
        Some(header_value) => {
            let value = String::from_utf8_lossy(header_value.as_bytes()).to_string();
            value
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|_| ProbeError::InvalidContentLength(value))
        }
        None => Ok(None),
    }
}
