use std::io;

use markup5ever_rcdom::RcDom;
use serde::Serialize;
use thiserror::Error;

use crate::env::EnvError;
use crate::network::probe::probe_content_length;
use crate::network::session::{FetchError, Session, Transport};
use crate::parsers::html::{
    extract_candidates, extract_images, fragment_to_dom, get_charset, html_to_dom,
    looks_like_full_document, ImageCandidate, ParseError,
};
use crate::parsers::link_rewriter::make_links_absolute;
use crate::utils::url::{derive_base_url, get_filename, is_http_url, Url};

/// Target every diagnostic of this crate is logged under
pub const LOG_TARGET: &str = "starimage";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:137.0) Gecko/20100101 Firefox/137.0";

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Represents errors that can occur while setting up starimage
///
/// Extraction itself never fails; these only surface when building a
/// [`Session`] or configuring the CLI.
#[derive(Error, Debug)]
pub enum StarImageError {
    #[error("failed to initialize HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid user agent {0:?}")]
    InvalidUserAgent(String),

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors that keep a document from being produced
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("error opening url {url}: {source}")]
    Fetch { url: String, source: FetchError },

    #[error("error parsing HTML: {0}")]
    Parse(#[from] ParseError),
}

/// Configuration options for starimage
#[derive(Default, Clone, Debug)]
pub struct StarImageOptions {
    pub base_url: Option<String>,
    pub insecure: bool,
    /// Per-request timeout in seconds, `0` keeps the HTTP client's default
    pub timeout: u64,
    pub user_agent: Option<String>,
}

/// Details of the largest image found
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub url: String,
    pub filename: String,
    pub size: u64,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// How an input string is going to be turned into a document
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Absolute HTTP(S) URL, fetched in full
    Url(Url),
    /// Markup containing an `<html>` tag
    Document,
    /// Any other markup
    Fragment,
}

/// Classifies `url_or_html` as a URL, a full document or a fragment
pub fn classify_input(url_or_html: &str) -> InputKind {
    match Url::parse(url_or_html) {
        Ok(url) if is_http_url(&url) => InputKind::Url(url),
        _ => {
            if looks_like_full_document(url_or_html) {
                InputKind::Document
            } else {
                InputKind::Fragment
            }
        }
    }
}

/// Finds the largest image referenced by a URL, an HTML document or an HTML fragment
///
/// Uses a [`Session`] with default options. Returns `None` when no image with an
/// absolute HTTP(S) URL was found or the input could not be turned into a document.
///
/// # Examples
///
/// ```no_run
/// let html = "<html><body><img src='http://a.com/img.gif'></body></html>";
/// if let Some(image) = starimage::extract(Some(html), None) {
///     println!("{} ({} bytes)", image.url, image.size);
/// }
/// ```
pub fn extract(url_or_html: Option<&str>, base_url: Option<&str>) -> Option<ExtractionResult> {
    let session = match Session::new(StarImageOptions::default()) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(target: LOG_TARGET, "{}", e);
            return None;
        }
    };

    extract_with(&session, url_or_html, base_url)
}

/// Same as [`extract`], going through the given transport
pub fn extract_with<T: Transport + ?Sized>(
    transport: &T,
    url_or_html: Option<&str>,
    base_url: Option<&str>,
) -> Option<ExtractionResult> {
    let resolver = DocumentResolver::new(transport);
    let dom = resolver.resolve(url_or_html, base_url)?;

    let images = extract_images(Some(&dom)).unwrap_or_default();
    let candidates = extract_candidates(&images);
    if candidates.is_empty() {
        tracing::info!(target: LOG_TARGET, "no image candidates found");
    }

    select_largest(transport, &candidates)
}

/// Picks the candidate with the greatest probed size
///
/// Every candidate is probed once, in order. Only a strictly greater size
/// replaces the current best, so the first candidate with the maximum size wins.
pub fn select_largest<T: Transport + ?Sized>(
    transport: &T,
    candidates: &[ImageCandidate],
) -> Option<ExtractionResult> {
    let mut best: Option<(&ImageCandidate, u64)> = None;

    for candidate in candidates {
        let size = probe_content_length(transport, &candidate.url);
        tracing::debug!(target: LOG_TARGET, "{} is {} bytes", candidate.url, size);

        match best {
            Some((_, best_size)) if size <= best_size => {}
            _ => best = Some((candidate, size)),
        }
    }

    best.map(|(candidate, size)| ExtractionResult {
        url: candidate.url.clone(),
        filename: get_filename(&candidate.url),
        size,
        width: candidate.declared_width,
        height: candidate.declared_height,
    })
}

/// Turns classified input into a DOM with relative links made absolute
pub struct DocumentResolver<'a, T: Transport + ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> DocumentResolver<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Produces the document, or `None` when there is no input or it can't be loaded
    pub fn resolve(&self, input: Option<&str>, explicit_base_url: Option<&str>) -> Option<RcDom> {
        let input = input?;

        let (dom, document_url) = match self.load(input) {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::error!(target: LOG_TARGET, "{}", e);
                return None;
            }
        };

        if let Some(base_url) = self.determine_base_url(explicit_base_url, document_url.as_ref()) {
            tracing::debug!(target: LOG_TARGET, "resolving links against {}", base_url);
            make_links_absolute(&dom.document, &base_url);
        }

        Some(dom)
    }

    /// Parses the input, returning the document URL when it was fetched
    fn load(&self, input: &str) -> Result<(RcDom, Option<Url>), ResolveError> {
        match classify_input(input) {
            InputKind::Url(url) => {
                tracing::debug!(target: LOG_TARGET, "fetching document from {}", url);
                let fetched =
                    self.transport
                        .fetch_document(&url)
                        .map_err(|source| ResolveError::Fetch {
                            url: input.to_string(),
                            source,
                        })?;
                let encoding_processor = EncodingProcessor::new();
                let dom = encoding_processor.process_encoding(&fetched.data, &fetched.charset)?;
                Ok((dom, Some(url)))
            }
            InputKind::Document => Ok((html_to_dom(input.as_bytes(), "utf-8")?, None)),
            InputKind::Fragment => Ok((fragment_to_dom(input)?, None)),
        }
    }

    /// Derived `scheme://hostname` for fetched documents without an explicit base,
    /// the explicit base otherwise
    fn determine_base_url(
        &self,
        explicit_base_url: Option<&str>,
        document_url: Option<&Url>,
    ) -> Option<Url> {
        match (explicit_base_url, document_url) {
            (None, Some(document_url)) => derive_base_url(document_url),
            (Some(explicit_base_url), _) => match Url::parse(explicit_base_url) {
                Ok(base_url) => Some(base_url),
                Err(e) => {
                    tracing::warn!(
                        target: LOG_TARGET,
                        "ignoring base URL {:?}: {}",
                        explicit_base_url,
                        e
                    );
                    None
                }
            },
            (None, None) => None,
        }
    }
}

/// 编码处理器
pub struct EncodingProcessor;

impl EncodingProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Parses fetched bytes, preferring the transport charset, then the one
    /// declared inside the document, then UTF-8
    pub fn process_encoding(&self, input_data: &[u8], charset: &str) -> Result<RcDom, ParseError> {
        if !charset.is_empty() && encoding_rs::Encoding::for_label(charset.as_bytes()).is_some() {
            return html_to_dom(input_data, charset);
        }

        let dom = html_to_dom(input_data, "utf-8")?;

        if let Some(html_charset) = get_charset(&dom.document) {
            if let Some(document_charset) =
                encoding_rs::Encoding::for_label_no_replacement(html_charset.as_bytes())
            {
                if document_charset != encoding_rs::UTF_8 {
                    return html_to_dom(input_data, document_charset.name());
                }
            }
        }

        Ok(dom)
    }
}

impl Default for EncodingProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses Content-Type header value into media type and charset
pub fn parse_content_type(content_type: &str) -> (String, String) {
    let mut parts = content_type.split(';');
    let media_type = parts.next().unwrap_or_default().trim().to_lowercase();
    let mut charset = String::new();

    for part in parts {
        let part = part.trim();
        if let Some(value) = part
            .get(..8)
            .filter(|prefix| prefix.eq_ignore_ascii_case("charset="))
            .map(|_| &part[8..])
        {
            charset = value.trim_matches('"').to_string();
        }
    }

    (media_type, charset)
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str, no_color: bool) {
    if !no_color && atty::is(atty::Stream::Stderr) {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
