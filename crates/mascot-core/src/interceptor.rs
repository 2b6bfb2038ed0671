//! Decides whether a click on an anchor becomes a choreographed transition.
//!
//! The web layer extracts a [`LinkClick`] from the DOM event and the current
//! location; everything else here is pure so it can run on the host.

use url::{Position, Url};

/// The parts of an anchor click that matter for interception.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkClick {
    /// Raw `href` attribute, not the resolved property.
    pub href: Option<String>,
    pub target: Option<String>,
    pub download: bool,
    /// `MouseEvent.button`; 0 is the primary button.
    pub button: i16,
    /// Any of ctrl/meta/shift/alt held.
    pub modified: bool,
}

impl LinkClick {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    MissingHref,
    Fragment,
    Mailto,
    NewContext,
    Download,
    ModifiedClick,
    Malformed,
    CrossOrigin,
    SamePage,
    ReducedMotion,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interception {
    /// Suppress default navigation and run the transition to this path.
    Transition(String),
    /// Leave the click to the browser.
    Ignore(IgnoreReason),
}

impl Interception {
    pub fn is_transition(&self) -> bool {
        matches!(self, Interception::Transition(_))
    }
}

fn opens_new_context(target: Option<&str>) -> bool {
    match target.map(str::trim) {
        None | Some("") => false,
        Some(t) => !t.eq_ignore_ascii_case("_self"),
    }
}

pub fn classify_click(click: &LinkClick, current: &Url) -> Interception {
    use IgnoreReason::*;

    let href = match click.href.as_deref().map(str::trim) {
        Some(h) if !h.is_empty() => h,
        _ => return Interception::Ignore(MissingHref),
    };
    if href.starts_with('#') {
        return Interception::Ignore(Fragment);
    }
    if href
        .get(..7)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("mailto:"))
    {
        return Interception::Ignore(Mailto);
    }
    if opens_new_context(click.target.as_deref()) {
        return Interception::Ignore(NewContext);
    }
    if click.download {
        return Interception::Ignore(Download);
    }
    if click.modified || click.button != 0 {
        return Interception::Ignore(ModifiedClick);
    }
    let resolved = match current.join(href) {
        Ok(u) => u,
        Err(e) => {
            log::debug!("[nav] not intercepting malformed href {:?}: {}", href, e);
            return Interception::Ignore(Malformed);
        }
    };
    if resolved.origin() != current.origin() {
        return Interception::Ignore(CrossOrigin);
    }
    if resolved[..Position::AfterQuery] == current[..Position::AfterQuery] {
        return Interception::Ignore(SamePage);
    }
    Interception::Transition(resolved[Position::BeforePath..].to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_query_and_fragment() {
        let here = Url::parse("https://example.com/").unwrap();
        let c = LinkClick::new("/news?page=2#top");
        assert_eq!(
            classify_click(&c, &here),
            Interception::Transition("/news?page=2#top".into())
        );
    }
}
