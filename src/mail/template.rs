//! Fixed presentational wrapper for outgoing summary mail.

/// Subject line for every summary delivery.
pub const SUBJECT: &str = "Meeting Summary";

/// Wrap a rendered summary fragment in the greeting/body/closing template.
#[must_use]
pub fn wrap_summary(summary_html: &str) -> String {
    format!(
        "<div style=\"font-family: sans-serif; line-height: 1.5;\">\
         <p>Hello,</p>\
         <p>Here is the meeting summary:</p>\
         <div>{}</div>\
         <p>Best regards,<br/>The Recap team</p>\
         </div>",
        summary_html
    )
}
