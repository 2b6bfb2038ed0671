// Host-side tests for link-click classification.

use mascot_core::*;

fn here() -> Url {
    Url::parse("https://starmy.example/talents?tab=all").unwrap()
}

fn classify(click: LinkClick) -> Interception {
    classify_click(&click, &here())
}

#[test]
fn same_origin_paths_are_intercepted() {
    assert_eq!(
        classify(LinkClick::new("/vtubers")),
        Interception::Transition("/vtubers".into())
    );
    assert_eq!(
        classify(LinkClick::new("https://starmy.example/news")),
        Interception::Transition("/news".into())
    );
    // relative to the current document
    assert_eq!(
        classify(LinkClick::new("gallery")),
        Interception::Transition("/gallery".into())
    );
    // same path, different query
    assert_eq!(
        classify(LinkClick::new("/talents?tab=new")),
        Interception::Transition("/talents?tab=new".into())
    );
}

#[test]
fn special_links_are_left_to_the_browser() {
    use IgnoreReason::*;
    let cases = [
        (LinkClick::default(), MissingHref),
        (LinkClick::new("   "), MissingHref),
        (LinkClick::new("#section"), Fragment),
        (LinkClick::new("mailto:x@y.com"), Mailto),
        (LinkClick::new("MAILTO:x@y.com"), Mailto),
        (LinkClick::new("https://other.example/vtubers"), CrossOrigin),
        (LinkClick::new("http://starmy.example/vtubers"), CrossOrigin),
        (LinkClick::new("https://starmy.example:8443/vtubers"), CrossOrigin),
        (LinkClick::new("javascript:void(0)"), CrossOrigin),
        (LinkClick::new("https://exa mple.com/"), Malformed),
        (LinkClick::new("/talents?tab=all"), SamePage),
        (LinkClick::new("/talents?tab=all#bio"), SamePage),
    ];
    for (click, reason) in cases {
        let href = click.href.clone();
        assert_eq!(
            classify_click(&click, &here()),
            Interception::Ignore(reason),
            "href {:?}",
            href
        );
    }
}

#[test]
fn new_tab_and_download_links_are_ignored() {
    let blank = LinkClick {
        target: Some("_blank".into()),
        ..LinkClick::new("/vtubers")
    };
    assert_eq!(classify(blank), Interception::Ignore(IgnoreReason::NewContext));

    let named = LinkClick {
        target: Some("preview".into()),
        ..LinkClick::new("/vtubers")
    };
    assert_eq!(classify(named), Interception::Ignore(IgnoreReason::NewContext));

    let own = LinkClick {
        target: Some("_self".into()),
        ..LinkClick::new("/vtubers")
    };
    assert!(classify(own).is_transition());

    let download = LinkClick {
        download: true,
        ..LinkClick::new("/press-kit.zip")
    };
    assert_eq!(classify(download), Interception::Ignore(IgnoreReason::Download));
}

#[test]
fn modified_and_auxiliary_clicks_are_ignored() {
    let ctrl = LinkClick {
        modified: true,
        ..LinkClick::new("/vtubers")
    };
    assert_eq!(classify(ctrl), Interception::Ignore(IgnoreReason::ModifiedClick));

    let middle = LinkClick {
        button: 1,
        ..LinkClick::new("/vtubers")
    };
    assert_eq!(classify(middle), Interception::Ignore(IgnoreReason::ModifiedClick));
}

#[test]
fn ignored_clicks_never_leave_idle() {
    let mut m = Mascot::new(MascotConfig::default(), Viewport::new(800.0, 600.0), 1).unwrap();
    let hrefs = [
        LinkClick::new("#section"),
        LinkClick::new("mailto:x@y.com"),
        LinkClick::new("https://elsewhere.example/"),
        LinkClick {
            target: Some("_blank".into()),
            ..LinkClick::new("/vtubers")
        },
    ];
    for (i, click) in hrefs.iter().enumerate() {
        let decision = m.intercept_click(click, &here(), &NoProbe, i as f64);
        assert!(!decision.is_transition());
        m.frame(i as f64 * 16.0);
        assert_eq!(m.phase(), Phase::Idle);
    }
}

#[test]
fn reduced_motion_skips_the_choreography_when_opted_in() {
    let mut config = MascotConfig::default();
    config.honor_reduced_motion = true;
    let mut m = Mascot::new(config, Viewport::new(800.0, 600.0), 1).unwrap();
    m.set_reduced_motion(true);
    assert_eq!(
        m.intercept_click(&LinkClick::new("/vtubers"), &here(), &NoProbe, 0.0),
        Interception::Ignore(IgnoreReason::ReducedMotion)
    );
    assert_eq!(m.phase(), Phase::Idle);

    // default: the preference is recorded but the transition still plays
    let mut m = Mascot::new(MascotConfig::default(), Viewport::new(800.0, 600.0), 1).unwrap();
    m.set_reduced_motion(true);
    assert!(m
        .intercept_click(&LinkClick::new("/vtubers"), &here(), &NoProbe, 0.0)
        .is_transition());
    assert_eq!(m.phase(), Phase::Moving);
}
