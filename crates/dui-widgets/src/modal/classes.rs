//! Style-hook class names and element identity for the modal.
//!
//! These names are the styling contract existing stylesheets match on. The
//! controller never reads them back to make decisions.

/// Custom element tag of the modal container.
pub const MODAL_TAG: &str = "dui-modal";
/// Class on the container element.
pub const CONTAINER: &str = "modal-container";

/// Class on the dialog surface.
pub const DIALOG: &str = "modal-dialog";
/// Added to the dialog while open.
pub const DIALOG_OPEN: &str = "modal-dialog--open";
/// Size modifier for [`ModalSize::Small`](super::ModalSize::Small).
pub const SIZE_SMALL: &str = "modal-dialog--small";
/// Size modifier for [`ModalSize::Medium`](super::ModalSize::Medium).
pub const SIZE_MEDIUM: &str = "modal-dialog--medium";
/// Size modifier for [`ModalSize::Large`](super::ModalSize::Large).
pub const SIZE_LARGE: &str = "modal-dialog--large";
/// Size modifier for [`ModalSize::Fullscreen`](super::ModalSize::Fullscreen).
pub const SIZE_FULLSCREEN: &str = "modal-dialog--fullscreen";

/// Class on the backdrop.
pub const BACKDROP: &str = "modal-backdrop";
/// Added to the backdrop while open.
pub const BACKDROP_OPEN: &str = "modal-backdrop--open";

/// Header block holding the title and close control.
pub const HEADER: &str = "modal-header";
/// Title heading.
pub const TITLE: &str = "modal-title";
/// Close control.
pub const CLOSE: &str = "modal-close";
/// Body slot.
pub const BODY: &str = "modal-body";
/// Footer slot.
pub const FOOTER: &str = "modal-footer";

/// Accessible label of the close control.
pub const CLOSE_LABEL: &str = "Close modal";
/// Visible glyph of the close control.
pub const CLOSE_GLYPH: &str = "\u{00d7}";
