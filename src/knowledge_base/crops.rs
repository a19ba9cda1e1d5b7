//! Descriptive crop metadata for presentation. Not used for training.

use crate::types::CropInfo;

pub static CROP_INFO: [CropInfo; 22] = [
    CropInfo {
        label: "rice",
        description: "A staple food crop for more than half the world's population.",
        growing_season: "Typically grown in summer, requires 3-6 months to mature.",
        ideal_temp: "20-27°C",
        ideal_ph: "5.5-6.5",
        water_needs: "High - requires standing water during most of its growth.",
    },
    CropInfo {
        label: "maize",
        description: "Also known as corn, a versatile crop used for food, feed, and industrial products.",
        growing_season: "Warm season crop, requires 90-120 days to mature.",
        ideal_temp: "20-25°C",
        ideal_ph: "5.8-7.0",
        water_needs: "Moderate - requires consistent moisture throughout growing season.",
    },
    CropInfo {
        label: "wheat",
        description: "One of the world's most important cereal grains, used primarily for bread and pasta.",
        growing_season: "Winter or spring crop depending on variety, requires 4-8 months to mature.",
        ideal_temp: "15-20°C",
        ideal_ph: "6.0-7.0",
        water_needs: "Moderate - sensitive to both drought and excessive moisture.",
    },
    CropInfo {
        label: "mungbean",
        description: "A small, green bean used in Asian cuisine, salads, and sprouting.",
        growing_season: "Warm season crop, requires 60-90 days to mature.",
        ideal_temp: "28-30°C",
        ideal_ph: "6.2-7.2",
        water_needs: "Moderate - drought-tolerant once established.",
    },
    CropInfo {
        label: "jute",
        description: "A fiber crop used primarily for making burlap, hessian, or gunny cloth.",
        growing_season: "Warm season crop, requires 120-150 days to mature.",
        ideal_temp: "25-35°C",
        ideal_ph: "6.0-7.5",
        water_needs: "High - requires consistent moisture throughout growing season.",
    },
    CropInfo {
        label: "cotton",
        description: "A soft fiber that grows around the seeds of the cotton plant, a major textile crop.",
        growing_season: "Warm season crop, requires 150-180 days to mature.",
        ideal_temp: "25-30°C",
        ideal_ph: "5.8-8.0",
        water_needs: "Moderate - drought-tolerant once established but needs consistent moisture for best yields.",
    },
    CropInfo {
        label: "coconut",
        description: "A tropical tree crop that produces fruits with a hard shell containing edible meat and liquid.",
        growing_season: "Perennial crop that produces year-round after 6-10 years of planting.",
        ideal_temp: "25-30°C",
        ideal_ph: "5.5-7.0",
        water_needs: "High - requires consistent moisture throughout the year.",
    },
    CropInfo {
        label: "papaya",
        description: "A tropical fruit tree with sweet, orange flesh and black seeds.",
        growing_season: "Perennial that begins fruiting within 10-12 months of planting.",
        ideal_temp: "22-28°C",
        ideal_ph: "6.0-7.0",
        water_needs: "Moderate to high - sensitive to drought and waterlogging.",
    },
    CropInfo {
        label: "orange",
        description: "A citrus fruit grown on trees, known for its sweet-tart flavor and high vitamin C content.",
        growing_season: "Perennial that takes 7-8 months from flowering to harvest.",
        ideal_temp: "15-29°C",
        ideal_ph: "5.5-6.5",
        water_needs: "Moderate - needs consistent moisture but good drainage.",
    },
    CropInfo {
        label: "apple",
        description: "A popular deciduous tree fruit known for its crisp texture and various flavors.",
        growing_season: "Perennial that blooms in spring and harvests in fall.",
        ideal_temp: "15-24°C",
        ideal_ph: "6.0-7.0",
        water_needs: "Moderate - requires consistent moisture, especially during fruit development.",
    },
    CropInfo {
        label: "muskmelon",
        description: "A sweet, aromatic fruit in the gourd family, related to cantaloupe.",
        growing_season: "Warm season crop, requires 80-110 days to mature.",
        ideal_temp: "24-32°C",
        ideal_ph: "6.0-7.0",
        water_needs: "Moderate - needs consistent moisture until fruit formation, then reduced.",
    },
    CropInfo {
        label: "watermelon",
        description: "A large, sweet fruit with juicy red flesh and black seeds, popular in summer.",
        growing_season: "Warm season crop, requires 80-110 days to mature.",
        ideal_temp: "25-30°C",
        ideal_ph: "6.0-7.0",
        water_needs: "Moderate - needs consistent moisture until fruit formation, then reduced.",
    },
    CropInfo {
        label: "grapes",
        description: "Perennial woody vines that produce clusters of berries used for wine, juice, and fresh consumption.",
        growing_season: "Perennial that produces fruits in late summer to fall.",
        ideal_temp: "15-30°C",
        ideal_ph: "5.5-6.5",
        water_needs: "Low to moderate - established vines can be relatively drought-tolerant.",
    },
    CropInfo {
        label: "banana",
        description: "A tropical fruit that grows in hanging clusters on large herbaceous plants.",
        growing_season: "Perennial that produces fruit year-round in tropical climates.",
        ideal_temp: "22-31°C",
        ideal_ph: "5.5-7.0",
        water_needs: "High - requires consistent moisture throughout growing season.",
    },
    CropInfo {
        label: "mango",
        description: "A juicy stone fruit from tropical trees, known for its sweet flavor and fibrous texture.",
        growing_season: "Perennial that typically flowers in winter and fruits in summer.",
        ideal_temp: "24-30°C",
        ideal_ph: "5.5-7.5",
        water_needs: "Moderate - established trees are somewhat drought-tolerant.",
    },
    CropInfo {
        label: "pomegranate",
        description: "A fruit-bearing deciduous shrub with red, edible seeds called arils.",
        growing_season: "Perennial that typically bears fruit 5-7 months after flowering.",
        ideal_temp: "18-35°C",
        ideal_ph: "5.5-7.0",
        water_needs: "Low to moderate - quite drought-tolerant once established.",
    },
    CropInfo {
        label: "chickpea",
        description: "A protein-rich legume used in various cuisines, also known as garbanzo beans.",
        growing_season: "Cool season crop, requires 90-120 days to mature.",
        ideal_temp: "18-26°C",
        ideal_ph: "6.0-8.0",
        water_needs: "Low to moderate - relatively drought-tolerant once established.",
    },
    CropInfo {
        label: "coffee",
        description: "A perennial crop grown for its beans, which are roasted to make coffee beverages.",
        growing_season: "Perennial that begins producing beans after 3-5 years.",
        ideal_temp: "15-24°C",
        ideal_ph: "5.0-6.0",
        water_needs: "Moderate - needs consistent moisture but good drainage.",
    },
    CropInfo {
        label: "lentil",
        description: "A small, lens-shaped legume high in protein and a dietary staple in many regions.",
        growing_season: "Cool season crop, requires 80-110 days to mature.",
        ideal_temp: "15-25°C",
        ideal_ph: "6.0-8.0",
        water_needs: "Low to moderate - relatively drought-tolerant.",
    },
    CropInfo {
        label: "pigeonpeas",
        description: "A perennial legume grown for its edible seeds, also known as red gram or arhar dal.",
        growing_season: "Warm season crop, requires 120-180 days to mature.",
        ideal_temp: "20-30°C",
        ideal_ph: "5.0-7.0",
        water_needs: "Low - highly drought-tolerant once established.",
    },
    CropInfo {
        label: "mothbeans",
        description: "A drought-resistant legume grown mainly in arid and semi-arid regions.",
        growing_season: "Warm season crop, requires 75-90 days to mature.",
        ideal_temp: "25-35°C",
        ideal_ph: "6.0-7.0",
        water_needs: "Very low - extremely drought-tolerant.",
    },
    CropInfo {
        label: "blackgram",
        description: "A bean grown primarily in the Indian subcontinent, also known as urad dal.",
        growing_season: "Warm season crop, requires 70-90 days to mature.",
        ideal_temp: "25-35°C",
        ideal_ph: "6.5-7.5",
        water_needs: "Moderate - sensitive to both drought and excessive moisture.",
    },
];
