//! Fertilizer metadata. Table order is the scan order for secondary picks.

use crate::types::FertilizerInfo;

pub const UREA: &str = "Urea";
pub const DAP: &str = "DAP";
pub const MOP: &str = "MOP";
pub const NPK_17_17_17: &str = "NPK 17-17-17";
pub const NPK_10_26_26: &str = "NPK 10-26-26";
pub const NPK_14_35_14: &str = "NPK 14-35-14";
pub const ORGANIC_COMPOST: &str = "Organic Compost";

pub static FERTILIZERS: [FertilizerInfo; 9] = [
    FertilizerInfo {
        name: UREA,
        description: "High-nitrogen granular fertilizer for rapid correction of nitrogen deficiency \
                      and vigorous vegetative growth.",
        ideal_for: &[
            "rice", "maize", "wheat", "cotton", "jute", "coffee", "banana", "papaya", "sorghum",
            "barley",
        ],
        n_content: 46.0,
        p_content: 0.0,
        k_content: 0.0,
        application_rate: "100-150 kg/ha, split into 2-3 doses",
        best_time: "Basal dose at sowing, top-dress at tillering or knee-high stage",
    },
    FertilizerInfo {
        name: DAP,
        description: "Diammonium phosphate. Concentrated phosphorus source with starter nitrogen, \
                      promotes root development and early establishment.",
        ideal_for: &[
            "wheat", "rice", "maize", "chickpea", "lentil", "mungbean", "blackgram",
            "pigeonpeas", "potato", "tomato",
        ],
        n_content: 18.0,
        p_content: 46.0,
        k_content: 0.0,
        application_rate: "100-125 kg/ha",
        best_time: "Basal application at or just before sowing",
    },
    FertilizerInfo {
        name: MOP,
        description: "Muriate of potash. High-potassium fertilizer that improves fruit quality, \
                      water regulation and disease resistance.",
        ideal_for: &[
            "banana", "coconut", "grapes", "potato", "muskmelon", "watermelon", "mango",
            "orange", "apple", "tomato",
        ],
        n_content: 0.0,
        p_content: 0.0,
        k_content: 60.0,
        application_rate: "60-100 kg/ha",
        best_time: "Basal application, with a second dose at flowering for fruit crops",
    },
    FertilizerInfo {
        name: NPK_17_17_17,
        description: "Balanced compound fertilizer supplying equal parts nitrogen, phosphorus \
                      and potassium.",
        ideal_for: &[
            "maize", "cotton", "tomato", "cabbage", "papaya", "pomegranate", "coffee", "apple",
            "onion",
        ],
        n_content: 17.0,
        p_content: 17.0,
        k_content: 17.0,
        application_rate: "200-250 kg/ha",
        best_time: "Before planting or during early vegetative growth",
    },
    FertilizerInfo {
        name: NPK_10_26_26,
        description: "Low-nitrogen compound rich in phosphorus and potassium, suited to root, \
                      tuber and fruiting crops.",
        ideal_for: &[
            "potato", "grapes", "banana", "chickpea", "pomegranate", "tomato", "muskmelon",
            "watermelon",
        ],
        n_content: 10.0,
        p_content: 26.0,
        k_content: 26.0,
        application_rate: "150-200 kg/ha",
        best_time: "Basal application at planting",
    },
    FertilizerInfo {
        name: NPK_14_35_14,
        description: "Phosphorus-heavy compound with moderate nitrogen and potassium, favoured \
                      for pulses and oilseeds.",
        ideal_for: &[
            "lentil", "chickpea", "mungbean", "blackgram", "pigeonpeas", "mothbeans", "onion",
        ],
        n_content: 14.0,
        p_content: 35.0,
        k_content: 14.0,
        application_rate: "125-150 kg/ha",
        best_time: "Basal application at sowing",
    },
    FertilizerInfo {
        name: ORGANIC_COMPOST,
        description: "Decomposed organic matter that improves soil structure, water retention \
                      and microbial activity while releasing nutrients slowly.",
        ideal_for: &[
            "coconut", "mango", "orange", "apple", "coffee", "grapes", "papaya", "pomegranate",
            "tomato", "mothbeans",
        ],
        n_content: 1.5,
        p_content: 1.0,
        k_content: 1.5,
        application_rate: "5-10 t/ha",
        best_time: "Incorporate 2-3 weeks before planting",
    },
    FertilizerInfo {
        name: "Ammonium Sulphate",
        description: "Nitrogen fertilizer with sulphur, useful on alkaline soils and for \
                      sulphur-hungry crops.",
        ideal_for: &["rice", "coffee", "potato", "onion"],
        n_content: 21.0,
        p_content: 0.0,
        k_content: 0.0,
        application_rate: "150-200 kg/ha",
        best_time: "Top-dress during active vegetative growth",
    },
    FertilizerInfo {
        name: "Single Super Phosphate",
        description: "Phosphorus fertilizer that also supplies calcium and sulphur, well suited \
                      to legumes.",
        ideal_for: &["mungbean", "blackgram", "mothbeans", "pigeonpeas", "lentil"],
        n_content: 0.0,
        p_content: 16.0,
        k_content: 0.0,
        application_rate: "250-375 kg/ha",
        best_time: "Basal application at sowing",
    },
];
