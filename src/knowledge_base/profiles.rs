//! Authored crop baselines: three cultivation variants for each of 22 crops.

use crate::types::CropProfile;

const fn row(
    label: &'static str,
    n: u32,
    p: u32,
    k: u32,
    temperature: f64,
    humidity: f64,
    ph: f64,
    rainfall: f64,
) -> CropProfile {
    CropProfile { label, n, p, k, temperature, humidity, ph, rainfall }
}

/// Every crop profile, grouped by crop. Table order defines label-encoding
/// order for models trained on synthesized data.
pub static CROP_PROFILES: [CropProfile; 66] = [
    row("rice", 80, 40, 40, 23.0, 80.0, 6.5, 200.0),
    row("rice", 85, 45, 45, 24.0, 85.0, 6.0, 210.0),
    row("rice", 90, 45, 40, 25.0, 82.0, 6.2, 205.0),
    row("maize", 85, 60, 55, 22.0, 60.0, 6.5, 85.0),
    row("maize", 80, 55, 50, 23.0, 65.0, 6.7, 90.0),
    row("maize", 90, 65, 60, 24.0, 62.0, 6.3, 88.0),
    row("wheat", 75, 50, 45, 18.0, 60.0, 6.8, 70.0),
    row("wheat", 70, 55, 40, 17.0, 65.0, 7.0, 65.0),
    row("wheat", 80, 45, 50, 19.0, 55.0, 6.5, 75.0),
    row("mungbean", 20, 60, 20, 30.0, 70.0, 6.5, 90.0),
    row("mungbean", 25, 65, 25, 31.0, 75.0, 6.7, 85.0),
    row("mungbean", 18, 55, 18, 29.0, 68.0, 6.3, 95.0),
    row("jute", 80, 40, 40, 32.0, 80.0, 6.8, 170.0),
    row("jute", 85, 45, 45, 33.0, 85.0, 7.0, 165.0),
    row("jute", 75, 35, 35, 31.0, 75.0, 6.5, 175.0),
    row("cotton", 115, 45, 40, 28.0, 70.0, 6.5, 90.0),
    row("cotton", 110, 50, 45, 29.0, 75.0, 6.8, 85.0),
    row("cotton", 120, 40, 35, 27.0, 65.0, 6.3, 95.0),
    row("coconut", 20, 10, 30, 27.0, 80.0, 6.0, 180.0),
    row("coconut", 25, 15, 35, 28.0, 85.0, 6.2, 185.0),
    row("coconut", 18, 8, 25, 26.0, 75.0, 5.8, 175.0),
    row("papaya", 100, 30, 30, 26.0, 75.0, 6.5, 150.0),
    row("papaya", 105, 35, 35, 27.0, 80.0, 6.7, 145.0),
    row("papaya", 95, 25, 25, 25.0, 70.0, 6.3, 155.0),
    row("orange", 40, 10, 40, 24.0, 70.0, 6.0, 140.0),
    row("orange", 45, 15, 45, 25.0, 75.0, 6.2, 135.0),
    row("orange", 35, 5, 35, 23.0, 65.0, 5.8, 145.0),
    row("apple", 40, 20, 40, 21.0, 70.0, 6.5, 110.0),
    row("apple", 45, 25, 45, 22.0, 75.0, 6.7, 105.0),
    row("apple", 35, 15, 35, 20.0, 65.0, 6.3, 115.0),
    row("muskmelon", 100, 50, 80, 27.0, 60.0, 6.5, 90.0),
    row("muskmelon", 105, 55, 85, 28.0, 65.0, 6.7, 85.0),
    row("muskmelon", 95, 45, 75, 26.0, 55.0, 6.3, 95.0),
    row("watermelon", 100, 50, 80, 28.0, 65.0, 6.5, 80.0),
    row("watermelon", 105, 55, 85, 29.0, 70.0, 6.7, 75.0),
    row("watermelon", 95, 45, 75, 27.0, 60.0, 6.3, 85.0),
    row("grapes", 20, 125, 200, 26.0, 80.0, 5.5, 80.0),
    row("grapes", 25, 130, 205, 27.0, 85.0, 5.7, 75.0),
    row("grapes", 15, 120, 195, 25.0, 75.0, 5.3, 85.0),
    row("banana", 100, 75, 50, 25.0, 75.0, 6.5, 100.0),
    row("banana", 105, 80, 55, 26.0, 80.0, 6.7, 95.0),
    row("banana", 95, 70, 45, 24.0, 70.0, 6.3, 105.0),
    row("mango", 20, 20, 30, 27.0, 60.0, 5.5, 110.0),
    row("mango", 25, 25, 35, 28.0, 65.0, 5.7, 105.0),
    row("mango", 15, 15, 25, 26.0, 55.0, 5.3, 115.0),
    row("pomegranate", 40, 40, 40, 28.0, 65.0, 5.5, 60.0),
    row("pomegranate", 45, 45, 45, 29.0, 70.0, 5.7, 55.0),
    row("pomegranate", 35, 35, 35, 27.0, 60.0, 5.3, 65.0),
    row("chickpea", 40, 60, 80, 24.0, 65.0, 6.8, 70.0),
    row("chickpea", 45, 65, 85, 25.0, 70.0, 7.0, 65.0),
    row("chickpea", 35, 55, 75, 23.0, 60.0, 6.5, 75.0),
    row("coffee", 100, 20, 30, 23.0, 80.0, 5.5, 150.0),
    row("coffee", 105, 25, 35, 24.0, 85.0, 5.7, 145.0),
    row("coffee", 95, 15, 25, 22.0, 75.0, 5.3, 155.0),
    row("lentil", 40, 60, 80, 23.0, 60.0, 6.5, 60.0),
    row("lentil", 45, 65, 85, 24.0, 65.0, 6.7, 55.0),
    row("lentil", 35, 55, 75, 22.0, 55.0, 6.3, 65.0),
    row("pigeonpeas", 20, 60, 40, 26.0, 70.0, 6.5, 90.0),
    row("pigeonpeas", 25, 65, 45, 27.0, 75.0, 6.7, 85.0),
    row("pigeonpeas", 15, 55, 35, 25.0, 65.0, 6.3, 95.0),
    row("mothbeans", 30, 30, 20, 28.0, 60.0, 6.5, 50.0),
    row("mothbeans", 35, 35, 25, 29.0, 65.0, 6.7, 45.0),
    row("mothbeans", 25, 25, 15, 27.0, 55.0, 6.3, 55.0),
    row("blackgram", 40, 60, 20, 25.0, 75.0, 6.8, 80.0),
    row("blackgram", 45, 65, 25, 26.0, 80.0, 7.0, 75.0),
    row("blackgram", 35, 55, 15, 24.0, 70.0, 6.5, 85.0),
];
