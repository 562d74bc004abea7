//! Mount points of the presentational components.
//!
//! The components are rendered client-side; the shell only places an
//! empty mount element per region, in a fixed order.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::shell::html::{Element, Node};

/// Attribute naming the component a mount element belongs to.
pub const COMPONENT_ATTR: &str = "data-component";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Analytics,
    Preloader,
    ScrollProgress,
    Providers,
    SmoothScroll,
    Header,
    PremiumUx,
    Main,
    Footer,
    Chatbot,
    Toaster,
}

impl Region {
    /// Regions directly under `<body>`, in render order.
    pub const BODY: [Region; 4] = [
        Region::Analytics,
        Region::Preloader,
        Region::ScrollProgress,
        Region::Providers,
    ];

    /// Regions inside the smooth-scroll wrapper, in render order.
    pub const CONTENT: [Region; 6] = [
        Region::Header,
        Region::PremiumUx,
        Region::Main,
        Region::Footer,
        Region::Chatbot,
        Region::Toaster,
    ];

    pub const fn component(self) -> &'static str {
        match self {
            Self::Analytics => "GoogleAnalytics",
            Self::Preloader => "PagePreloader",
            Self::ScrollProgress => "ScrollProgress",
            Self::Providers => "Providers",
            Self::SmoothScroll => "SmoothScroll",
            Self::Header => "Header",
            Self::PremiumUx => "PremiumUX",
            Self::Main => "Main",
            Self::Footer => "Footer",
            Self::Chatbot => "Chatbot",
            Self::Toaster => "Toaster",
        }
    }

    /// Empty mount element of a leaf component.
    pub fn mount(self) -> Element {
        Element::new("div").attr(COMPONENT_ATTR, self.component())
    }
}

const GTAG_ORIGIN: &str = "https://www.googletagmanager.com";

/// Query value escaping that leaves `G-XXXX` IDs readable.
const ID_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// gtag.js loader plus its bootstrap snippet.
///
/// `measurement_id` is validated at config load to `[A-Za-z0-9-]+`, so it is
/// safe inside the inline script.
pub fn analytics_beacon(measurement_id: &str) -> [Element; 2] {
    let src = format!(
        "{GTAG_ORIGIN}/gtag/js?id={}",
        utf8_percent_encode(measurement_id, ID_ESCAPE)
    );
    let loader = Element::new("script")
        .attr(COMPONENT_ATTR, Region::Analytics.component())
        .attr("async", "")
        .attr("src", src);
    let bootstrap = Element::new("script").child(Node::Raw(format!(
        "window.dataLayer=window.dataLayer||[];\
         function gtag(){{dataLayer.push(arguments);}}\
         gtag('js',new Date());gtag('config','{measurement_id}');"
    )));
    [loader, bootstrap]
}
