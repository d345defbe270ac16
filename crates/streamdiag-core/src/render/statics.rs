//! Fixed content rendered alongside every document: the pipeline workflow
//! diagrams and the layer legend.
//!
//! None of this comes from the data file.  The workflows illustrate where the
//! standards in the diagram sit in a real delivery chain; the legend explains
//! the colour tiers the stylesheet assigns to layer ids.

/// A canonical delivery pipeline, drawn as a row of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workflow {
    pub name: &'static str,
    pub steps: &'static [&'static str],
}

/// One legend row: the CSS tier class, its label and what it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub tier: &'static str,
    pub label: &'static str,
    pub meaning: &'static str,
}

pub const WORKFLOWS: &[Workflow] = &[
    Workflow {
        name: "Live Streaming",
        steps: &["Camera/Input", "Encoder", "Packager", "CDN", "Player"],
    },
    Workflow {
        name: "VOD",
        steps: &["Source File", "Transcoder", "Storage", "CDN", "Player"],
    },
    Workflow {
        name: "Broadcast",
        steps: &["Studio/Playout", "Encoder", "Multiplexer", "Transmission", "Receiver"],
    },
    Workflow {
        name: "OTT",
        steps: &["Content Source", "Transcoder", "Packager/DRM", "CDN", "App/Smart TV"],
    },
    Workflow {
        name: "Real-Time/Interactive",
        steps: &["Capture", "WebRTC Encoder", "Media Server (SFU)", "Relay", "Browser"],
    },
];

pub const LEGEND: &[LegendEntry] = &[
    LegendEntry {
        tier: "application",
        label: "Application",
        meaning: "Players, SDKs and user-facing services",
    },
    LegendEntry {
        tier: "delivery",
        label: "Delivery",
        meaning: "Streaming protocols, CDNs and transport",
    },
    LegendEntry {
        tier: "packaging",
        label: "Packaging",
        meaning: "Containers, manifests and content protection",
    },
    LegendEntry {
        tier: "codec",
        label: "Codec",
        meaning: "Audio and video compression formats",
    },
    LegendEntry {
        tier: "infrastructure",
        label: "Infrastructure",
        meaning: "Capture, contribution and production systems",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_there_are_five_workflows_in_canonical_order() {
        let names: Vec<&str> = WORKFLOWS.iter().map(|w| w.name).collect();
        assert_eq!(
            names,
            vec!["Live Streaming", "VOD", "Broadcast", "OTT", "Real-Time/Interactive"]
        );
    }

    #[test]
    fn test_every_workflow_has_steps() {
        assert!(WORKFLOWS.iter().all(|w| !w.steps.is_empty()));
    }
}
