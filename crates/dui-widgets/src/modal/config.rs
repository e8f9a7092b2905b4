#![forbid(unsafe_code)]

//! Modal configuration.
//!
//! [`ModalConfig`] is the builder-style configuration handed to
//! [`Modal::new`](super::Modal::new). It is immutable once the modal is
//! constructed. [`ModalOptions`] is its plain-data subset, suitable for
//! loading from a configuration file when the `serde` feature is on.

use core::fmt;
use core::str::FromStr;
use dui_dom::Document;
use indexmap::IndexMap;

use super::classes;
use crate::content::Content;

/// Errors from parsing modal configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown modal size '{0}' (expected small, medium, large or fullscreen)")]
    UnknownSize(String),
    #[cfg(feature = "serde")]
    #[error("invalid modal options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Dialog surface size variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
    Fullscreen,
}

impl ModalSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::Fullscreen];

    /// Lower-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Fullscreen => "fullscreen",
        }
    }

    /// Style-hook class for this size.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Small => classes::SIZE_SMALL,
            Self::Medium => classes::SIZE_MEDIUM,
            Self::Large => classes::SIZE_LARGE,
            Self::Fullscreen => classes::SIZE_FULLSCREEN,
        }
    }
}

impl fmt::Display for ModalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModalSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownSize(s.to_owned()))
    }
}

/// A transition a hook asks for once it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Open,
    Close,
}

/// What a lifecycle hook can touch.
///
/// Hooks run after the transition has fully committed. A hook that wants
/// the modal to change state again (an `on_close` that reopens, say) calls
/// [`request_open`](Self::request_open) or
/// [`request_close`](Self::request_close); the request is applied after the
/// hook returns, against the state at that moment.
pub struct HookContext<'a> {
    document: &'a mut Document,
    request: Option<Transition>,
}

impl<'a> HookContext<'a> {
    pub(crate) fn new(document: &'a mut Document) -> Self {
        Self {
            document,
            request: None,
        }
    }

    /// The document the modal lives in.
    pub fn document(&mut self) -> &mut Document {
        &mut *self.document
    }

    /// Ask for `open()` after this hook. Last request wins.
    pub fn request_open(&mut self) {
        self.request = Some(Transition::Open);
    }

    /// Ask for `close()` after this hook. Last request wins.
    pub fn request_close(&mut self) {
        self.request = Some(Transition::Close);
    }

    pub(crate) fn into_request(self) -> Option<Transition> {
        self.request
    }
}

/// Lifecycle callback.
pub type LifecycleHook = Box<dyn FnMut(&mut HookContext<'_>)>;

/// Modal configuration.
///
/// Defaults: empty title, body and footer; [`ModalSize::Medium`]; closable;
/// backdrop shown; no extra classes or attributes; no hooks.
pub struct ModalConfig {
    /// Heading text; empty renders no title.
    pub title: String,
    pub body: Content,
    pub footer: Content,
    pub size: ModalSize,
    /// Enables Escape, backdrop click and the close control.
    pub closable: bool,
    pub show_backdrop: bool,
    /// Extra dialog classes, after the size class.
    pub class_names: Vec<String>,
    /// Extra dialog attributes, unique by name, in insertion order.
    pub attributes: IndexMap<String, String>,
    pub(crate) on_open: Option<LifecycleHook>,
    pub(crate) on_close: Option<LifecycleHook>,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: Content::Empty,
            footer: Content::Empty,
            size: ModalSize::Medium,
            closable: true,
            show_backdrop: true,
            class_names: Vec::new(),
            attributes: IndexMap::new(),
            on_open: None,
            on_close: None,
        }
    }
}

impl fmt::Debug for ModalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalConfig")
            .field("title", &self.title)
            .field("body", &self.body)
            .field("footer", &self.footer)
            .field("size", &self.size)
            .field("closable", &self.closable)
            .field("show_backdrop", &self.show_backdrop)
            .field("class_names", &self.class_names)
            .field("attributes", &self.attributes)
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

impl ModalConfig {
    /// Same as [`ModalConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Heading text. Empty means no title element is rendered.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Initial body slot content.
    #[must_use]
    pub fn body(mut self, body: impl Into<Content>) -> Self {
        self.body = body.into();
        self
    }

    /// Initial footer slot content. Empty means no footer element.
    #[must_use]
    pub fn footer(mut self, footer: impl Into<Content>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Dialog size variant.
    #[must_use]
    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    /// Whether Escape, the backdrop and the close control dismiss the
    /// dialog. A non-closable dialog renders no close control.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Whether a backdrop element is rendered behind the dialog.
    #[must_use]
    pub fn show_backdrop(mut self, show: bool) -> Self {
        self.show_backdrop = show;
        self
    }

    /// Append an extra class for the dialog element.
    #[must_use]
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_names.push(class.into());
        self
    }

    /// Set an extra dialog attribute, replacing an earlier value for `name`.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Hook run after every Closed to Open transition.
    #[must_use]
    pub fn on_open(mut self, hook: impl FnMut(&mut HookContext<'_>) + 'static) -> Self {
        self.on_open = Some(Box::new(hook));
        self
    }

    /// Hook run after every Open to Closed transition.
    #[must_use]
    pub fn on_close(mut self, hook: impl FnMut(&mut HookContext<'_>) + 'static) -> Self {
        self.on_close = Some(Box::new(hook));
        self
    }
}

/// Plain-data modal options.
///
/// Body and footer are text. Field names are camelCase when (de)serialized
/// and every field is optional, falling back to the [`ModalConfig`]
/// defaults. An unknown `size` is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase", deny_unknown_fields)
)]
pub struct ModalOptions {
    pub title: String,
    pub body: String,
    pub footer: String,
    pub size: ModalSize,
    pub closable: bool,
    pub show_backdrop: bool,
    pub class_names: Vec<String>,
    /// Extra dialog attributes in document order.
    pub attributes: IndexMap<String, String>,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            footer: String::new(),
            size: ModalSize::Medium,
            closable: true,
            show_backdrop: true,
            class_names: Vec::new(),
            attributes: IndexMap::new(),
        }
    }
}

impl ModalOptions {
    /// Parse options from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into a hook-less [`ModalConfig`].
    #[must_use]
    pub fn into_config(self) -> ModalConfig {
        let mut config = ModalConfig::new()
            .title(self.title)
            .body(self.body)
            .footer(self.footer)
            .size(self.size)
            .closable(self.closable)
            .show_backdrop(self.show_backdrop);
        config.class_names = self.class_names;
        config.attributes = self.attributes;
        config
    }
}

impl From<ModalOptions> for ModalConfig {
    fn from(options: ModalOptions) -> Self {
        options.into_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ModalConfig::default();
        assert_eq!(config.title, "");
        assert!(config.body.is_empty());
        assert!(config.footer.is_empty());
        assert_eq!(config.size, ModalSize::Medium);
        assert!(config.closable);
        assert!(config.show_backdrop);
        assert!(config.class_names.is_empty());
        assert!(config.attributes.is_empty());
        assert!(config.on_open.is_none());
        assert!(config.on_close.is_none());
    }

    #[test]
    fn attribute_builder_keeps_keys_unique() {
        let config = ModalConfig::new()
            .attribute("data-id", "1")
            .attribute("data-kind", "confirm")
            .attribute("data-id", "2");
        let attrs: Vec<_> = config
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(attrs, vec![("data-id", "2"), ("data-kind", "confirm")]);
    }

    #[test]
    fn size_parses_case_insensitively() {
        assert_eq!("small".parse::<ModalSize>().unwrap(), ModalSize::Small);
        assert_eq!(" FullScreen ".parse::<ModalSize>().unwrap(), ModalSize::Fullscreen);
        let err = "huge".parse::<ModalSize>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSize(ref s) if s == "huge"));
        assert!(err.to_string().contains("huge"));
    }

    #[test]
    fn size_display_and_class() {
        for size in ModalSize::ALL {
            assert_eq!(size.to_string(), size.as_str());
            assert!(size.class().ends_with(size.as_str()));
        }
    }

    #[test]
    fn debug_hides_hook_bodies() {
        let config = ModalConfig::new().on_open(|_| {});
        let debug = format!("{config:?}");
        assert!(debug.contains("on_open: true"));
        assert!(debug.contains("on_close: false"));
    }

    #[test]
    fn options_convert_to_config() {
        let mut attributes = IndexMap::new();
        attributes.insert("data-b".to_owned(), "2".to_owned());
        attributes.insert("data-a".to_owned(), "1".to_owned());
        let options = ModalOptions {
            title: "Confirm".into(),
            body: "Are you sure?".into(),
            size: ModalSize::Small,
            closable: false,
            class_names: vec!["danger".into()],
            attributes,
            ..ModalOptions::default()
        };
        let config: ModalConfig = options.into();
        assert_eq!(config.title, "Confirm");
        assert_eq!(config.body, Content::from("Are you sure?"));
        assert!(config.footer.is_empty());
        assert_eq!(config.size, ModalSize::Small);
        assert!(!config.closable);
        assert!(config.show_backdrop);
        assert_eq!(config.class_names, vec!["danger".to_owned()]);
        let keys: Vec<_> = config.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["data-b", "data-a"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_from_json_use_defaults() {
        let options = ModalOptions::from_json(r#"{"title":"Hi","size":"large"}"#).unwrap();
        assert_eq!(options.title, "Hi");
        assert_eq!(options.size, ModalSize::Large);
        assert!(options.closable);
        assert!(options.show_backdrop);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_from_json_keep_attribute_order() {
        let options = ModalOptions::from_json(
            r#"{"attributes":{"data-z":"1","data-a":"2","data-m":"3"}}"#,
        )
        .unwrap();
        let config = options.clone().into_config();
        let keys: Vec<_> = config.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["data-z", "data-a", "data-m"]);

        let json = serde_json::to_string(&options).unwrap();
        let z = json.find("data-z").unwrap();
        let a = json.find("data-a").unwrap();
        assert!(z < a, "{json}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_from_json_rejects_unknown_size() {
        let err = ModalOptions::from_json(r#"{"size":"huge"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
