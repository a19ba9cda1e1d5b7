//! Rationale text for fertilizer recommendations
//!
//! Every primary rationale names the deficient nutrient(s) and the actual
//! deficits in kg/ha, so the text stays meaningful when shown on its own
//! (e.g. at the end of a report summary).

use super::selector::{DeficiencyPattern, Deficits};
use crate::types::Nutrient;

/// Rationale for the primary pick of a deficiency pattern.
pub fn primary_rationale(pattern: DeficiencyPattern, d: &Deficits) -> String {
    match pattern {
        DeficiencyPattern::NitrogenOnly => format!(
            "Severe nitrogen deficiency detected (deficit: {:.1} kg/ha). \
             Urea provides a concentrated nitrogen source to restore vegetative growth.",
            d.n
        ),
        DeficiencyPattern::PhosphorusOnly => format!(
            "Severe phosphorus deficiency detected (deficit: {:.1} kg/ha). \
             DAP supplies readily available phosphorus for root development.",
            d.p
        ),
        DeficiencyPattern::PotassiumOnly => format!(
            "Severe potassium deficiency detected (deficit: {:.1} kg/ha). \
             MOP restores potassium for water regulation and disease resistance.",
            d.k
        ),
        DeficiencyPattern::AllThree => format!(
            "Severe deficiencies in nitrogen, phosphorus and potassium \
             (deficits: N {:.1}, P {:.1}, K {:.1} kg/ha). \
             A balanced NPK 17-17-17 addresses all three at once.",
            d.n, d.p, d.k
        ),
        DeficiencyPattern::PhosphorusPotassium => format!(
            "Severe phosphorus and potassium deficiencies \
             (deficits: P {:.1}, K {:.1} kg/ha; nitrogen deficit {:.1} kg/ha). \
             NPK 10-26-26 is weighted toward P and K.",
            d.p, d.k, d.n
        ),
        DeficiencyPattern::NitrogenPhosphorus => format!(
            "Severe nitrogen and phosphorus deficiencies \
             (deficits: N {:.1}, P {:.1} kg/ha; potassium deficit {:.1} kg/ha). \
             NPK 14-35-14 supplies both with a phosphorus emphasis.",
            d.n, d.p, d.k
        ),
        DeficiencyPattern::ModerateCombined => format!(
            "No single severe deficiency, but combined shortfall of {:.1} kg/ha ({}). \
             A balanced NPK 17-17-17 corrects the overall gap.",
            d.total(),
            deficit_list(d)
        ),
        DeficiencyPattern::Maintenance => {
            let listed = deficit_list(d);
            if listed.is_empty() {
                "Nitrogen, phosphorus and potassium are all at or above target. \
                 Organic compost maintains soil structure and microbial activity."
                    .to_string()
            } else {
                format!(
                    "Only minor shortfalls ({}), total {:.1} kg/ha. \
                     Organic compost covers these gradually while improving soil health.",
                    listed,
                    d.total()
                )
            }
        }
    }
}

/// Rationale for a crop-suited secondary pick.
pub fn secondary_rationale(crop: &str, fertilizer: &str, best_time: &str) -> String {
    format!("{fertilizer} is particularly suited to {crop}. Timing: {best_time}.")
}

/// `"nitrogen 10.0 kg/ha, potassium 2.5 kg/ha"`; empty when nothing is short.
fn deficit_list(d: &Deficits) -> String {
    Nutrient::ALL
        .iter()
        .filter(|&&nutrient| d.get(nutrient) > 0.0)
        .map(|&nutrient| format!("{} {:.1} kg/ha", nutrient, d.get(nutrient)))
        .collect::<Vec<_>>()
        .join(", ")
}
