//! Plain-text report assembly and the interpretation fragments.
//!
//! Display text lives here and only here: the computation crates hand over
//! enums and numbers, never strings.

use natal_chart::{Aspect, NatalChart};
use natal_transit::TransitReport;

use crate::format::{format_aspect, format_placement, format_position};

/// Life-area theme of a natal house, for transit house lines.
pub const fn house_theme(house: u8) -> &'static str {
    match house {
        1 => "self and appearance",
        2 => "money and possessions",
        3 => "communication and siblings",
        4 => "home and family",
        5 => "creativity and romance",
        6 => "work and health",
        7 => "partnership and marriage",
        8 => "shared resources and transformation",
        9 => "travel and philosophy",
        10 => "career and public standing",
        11 => "friends and community",
        12 => "solitude and the subconscious",
        _ => "unknown",
    }
}

/// A short interpretation fragment per aspect type.
pub const fn aspect_phrase(aspect: Aspect) -> &'static str {
    match aspect {
        Aspect::Conjunction => "energies fuse and intensify",
        Aspect::Sextile => "an easy opening for cooperation",
        Aspect::Square => "friction that demands action",
        Aspect::Trine => "a harmonious, effortless flow",
        Aspect::Opposition => "a tension seeking balance",
    }
}

/// Assemble the natal chart report.
pub fn natal_report(chart: &NatalChart) -> String {
    let mut out = String::new();
    out.push_str("NATAL CHART\n");
    out.push_str(&format!(
        "Ascendant: {}\n",
        format_position(chart.houses.ascendant_deg)
    ));
    out.push_str(&format!(
        "Midheaven: {}\n",
        format_position(chart.houses.midheaven_deg)
    ));
    if chart.houses.high_latitude {
        out.push_str("Note: high-latitude chart; house positions are unreliable.\n");
    }

    out.push_str("\nPlacements\n");
    for p in chart.body_placements() {
        out.push_str(&format_placement(p));
        out.push('\n');
    }

    out.push_str("\nAspects\n");
    if chart.aspects.is_empty() {
        out.push_str("(none within orb)\n");
    }
    for hit in &chart.aspects {
        out.push_str(&format!(
            "{} — {}\n",
            format_aspect(hit),
            aspect_phrase(hit.aspect)
        ));
    }

    out.push_str("\nBalance\n");
    out.push_str(&format!(
        "Elements (Fire/Earth/Air/Water): {}/{}/{}/{} — dominant {}\n",
        chart.balance.elements[0],
        chart.balance.elements[1],
        chart.balance.elements[2],
        chart.balance.elements[3],
        chart.balance.dominant_element.name()
    ));
    out.push_str(&format!(
        "Modalities (Cardinal/Fixed/Mutable): {}/{}/{} — dominant {}\n",
        chart.balance.modalities[0],
        chart.balance.modalities[1],
        chart.balance.modalities[2],
        chart.balance.dominant_modality.name()
    ));

    out
}

/// Assemble the transit report.
pub fn transit_report(report: &TransitReport) -> String {
    let mut out = String::new();
    out.push_str("TRANSITS\n");

    out.push_str("\nMovement\n");
    for m in &report.movements {
        out.push_str(&format!(
            "{}: {} -> {}",
            m.body.name(),
            format_position(m.start_longitude_deg),
            format_position(m.end_longitude_deg)
        ));
        if m.changed_sign() {
            out.push_str(&format!(" (enters {})", m.end_sign.name()));
        }
        out.push('\n');
        out.push_str(&format!(
            "  house {} ({})",
            m.start_house,
            house_theme(m.start_house)
        ));
        if m.changed_house() {
            out.push_str(&format!(
                " -> house {} ({})",
                m.end_house,
                house_theme(m.end_house)
            ));
        }
        out.push('\n');
    }

    out.push_str("\nContacts\n");
    if report.hits.is_empty() {
        out.push_str("(none within orb)\n");
    }
    for hit in &report.hits {
        out.push_str(&format!(
            "[{}] {} — {}; touches {}\n",
            hit.score,
            hit.key(),
            aspect_phrase(hit.aspect),
            house_theme(hit.house)
        ));
    }

    out
}

/// The full analysis: natal section plus an optional transit section.
pub fn full_report(chart: &NatalChart, transits: Option<&TransitReport>) -> String {
    let mut out = natal_report(chart);
    if let Some(t) = transits {
        out.push('\n');
        out.push_str(&transit_report(t));
    }
    out
}
