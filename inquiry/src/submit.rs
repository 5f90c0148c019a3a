//! Submission handler: turns a draft into a mail-client invocation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Launching a `mailto:` link is fire-and-forget. The handler can only tell
//! whether the activation step itself failed, never whether mail was sent, so
//! both outcomes end in a [`Notice`] that points the user at the direct sales
//! address. Nothing is retried.
//!
//! The platform side sits behind [`LinkHost`]: the browser attaches a hidden
//! anchor to the document, the CLI hands the URI to the OS opener. Once a link
//! is attached it is always detached, whatever activation returns.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use serde::Serialize;

use crate::draft::InquiryDraft;
use crate::error::{InquiryError, LaunchError};
use crate::mailto::{MailtoUri, SALES_ADDRESS};
use crate::message::{EmailMessage, MessageTemplate};
use crate::validate::validate;

/// Delay before the confirmation notice, so the mail client launch registers
/// before a modal interrupts the user.
pub const CONFIRMATION_DELAY_MS: u32 = 500;

/// Platform that can activate a transient link.
pub trait LinkHost {
    /// Handle to an attached link.
    type Link;

    /// Create the transient link for `href`.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError`] if the link cannot be created.
    fn attach(&mut self, href: &str) -> Result<Self::Link, LaunchError>;

    /// Activate the link, launching the mail client.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError`] if the platform refuses the activation.
    fn activate(&mut self, link: &Self::Link) -> Result<(), LaunchError>;

    /// Remove the link again.
    fn detach(&mut self, link: Self::Link);
}

/// Severity of a [`Notice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Confirmation,
    Failure,
}

/// User-facing message reporting a submission outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub delay_ms: u32,
}

impl Notice {
    /// Shown after a successful launch.
    pub fn confirmation() -> Self {
        Self {
            kind: NoticeKind::Confirmation,
            text: format!(
                "이메일 클라이언트를 실행합니다.\n\n메일 발송이 완료되지 않으면 {SALES_ADDRESS} 로 직접 문의 부탁드립니다."
            ),
            delay_ms: CONFIRMATION_DELAY_MS,
        }
    }

    /// Shown immediately when the mail client could not be launched.
    pub fn failure() -> Self {
        Self {
            kind: NoticeKind::Failure,
            text: format!("메일 클라이언트를 열 수 없습니다. {SALES_ADDRESS} 로 직접 문의해주세요."),
            delay_ms: 0,
        }
    }
}

/// What a single submission did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub uri: String,
    pub message: EmailMessage,
    pub notice: Notice,
    pub launch_error: Option<LaunchError>,
}

impl Receipt {
    pub fn launched(&self) -> bool {
        self.launch_error.is_none()
    }
}

/// Validate `draft`, compose the email, and launch it through `host`.
///
/// A launch failure is not an error for the caller: it is logged and reported
/// through [`Receipt::notice`]. Each call is independent of earlier ones.
///
/// # Errors
///
/// Returns the validation error from [`validate`] without touching `host`.
pub fn submit<H: LinkHost>(
    draft: &InquiryDraft,
    template: &MessageTemplate,
    host: &mut H,
) -> Result<Receipt, InquiryError> {
    validate(draft)?;

    let message = template.render(draft);
    let uri = MailtoUri::for_sales(message.clone()).to_string();

    let launch_error = launch(host, &uri).err();
    let notice = match &launch_error {
        None => Notice::confirmation(),
        Some(err) => {
            log::warn!("mailto launch failed: {err}");
            Notice::failure()
        }
    };

    Ok(Receipt { uri, message, notice, launch_error })
}

fn launch<H: LinkHost>(host: &mut H, uri: &str) -> Result<(), LaunchError> {
    let link = host.attach(uri)?;
    let activated = host.activate(&link);
    host.detach(link);
    activated
}
