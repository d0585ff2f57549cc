use crate::domain::recommendation::entities::{RecommendationRecord, SupplementEntry};

/// Immutable symptom table. Iteration follows definition order, which is
/// also the priority order for partial matches.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    entries: Vec<(String, RecommendationRecord)>,
    default_record: RecommendationRecord,
}

impl KnowledgeBase {
    pub fn new(
        entries: Vec<(String, RecommendationRecord)>,
        default_record: RecommendationRecord,
    ) -> Self {
        Self {
            entries,
            default_record,
        }
    }

    /// Exact, case-sensitive lookup. First definition wins on duplicate keys.
    pub fn get(&self, key: &str) -> Option<&RecommendationRecord> {
        self.entries
            .iter()
            .find(|(symptom, _)| symptom == key)
            .map(|(_, record)| record)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &RecommendationRecord)> {
        self.entries
            .iter()
            .map(|(symptom, record)| (symptom.as_str(), record))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(symptom, _)| symptom.as_str())
    }

    pub fn default_record(&self) -> &RecommendationRecord {
        &self.default_record
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The curated table shipped with the service.
    pub fn builtin() -> Self {
        Self::new(
            vec![
                ("Headache".to_string(), headache()),
                ("Fatigue".to_string(), fatigue()),
                ("Stress".to_string(), stress()),
                ("Joint Pain".to_string(), joint_pain()),
                ("Sleep Issues".to_string(), sleep_issues()),
                ("Digestive Issues".to_string(), digestive_issues()),
            ],
            unmatched(),
        )
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

fn supplement(
    name: &str,
    dosage: &str,
    benefits: &[&str],
    reasoning: &str,
    precautions: &[&str],
    confidence: f64,
) -> SupplementEntry {
    SupplementEntry {
        name: name.to_string(),
        dosage: dosage.to_string(),
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
        reasoning: reasoning.to_string(),
        precautions: precautions.iter().map(|p| p.to_string()).collect(),
        confidence,
    }
}

fn record(summary: &str, disclaimer: &str, recommendations: Vec<SupplementEntry>) -> RecommendationRecord {
    RecommendationRecord {
        recommendations,
        summary: summary.to_string(),
        disclaimer: disclaimer.to_string(),
    }
}

fn headache() -> RecommendationRecord {
    record(
        "These supplements may help reduce headache frequency and intensity through various mechanisms including inflammation reduction and muscle relaxation.",
        "These recommendations are for informational purposes only. Consult with a healthcare professional before starting any supplement regimen, especially if you have chronic headaches or take medications.",
        vec![
            supplement(
                "Magnesium Glycinate",
                "400-600mg daily",
                &[
                    "Reduces muscle tension and nerve excitability",
                    "May prevent migraine headaches",
                    "Supports healthy blood vessel function",
                    "Helps with stress-related headaches",
                ],
                "Magnesium deficiency is linked to headaches and migraines. This form is well-absorbed and gentle on the stomach.",
                &[
                    "May cause digestive upset in high doses",
                    "Can interact with certain medications",
                    "Start with lower doses and increase gradually",
                ],
                85.0,
            ),
            supplement(
                "Coenzyme Q10 (CoQ10)",
                "100-300mg daily",
                &[
                    "Supports cellular energy production",
                    "May reduce migraine frequency",
                    "Antioxidant properties",
                    "Supports cardiovascular health",
                ],
                "Studies show CoQ10 can reduce migraine frequency and severity by improving cellular energy metabolism.",
                &[
                    "May interact with blood thinners",
                    "Take with meals for better absorption",
                    "Effects may take 2-3 months to notice",
                ],
                75.0,
            ),
            supplement(
                "Riboflavin (Vitamin B2)",
                "400mg daily",
                &[
                    "Supports energy metabolism",
                    "May prevent migraines",
                    "Supports nervous system function",
                    "Antioxidant properties",
                ],
                "High-dose riboflavin has been shown in studies to reduce migraine frequency by supporting mitochondrial function.",
                &[
                    "May cause bright yellow urine (harmless)",
                    "Take with food to reduce stomach upset",
                    "Effects typically seen after 3 months",
                ],
                80.0,
            ),
        ],
    )
}

fn fatigue() -> RecommendationRecord {
    record(
        "These supplements target common causes of fatigue including nutrient deficiencies, poor cellular energy production, and adrenal stress.",
        "Persistent fatigue may indicate underlying health conditions. Consult a healthcare provider for proper evaluation before relying solely on supplements.",
        vec![
            supplement(
                "Iron Bisglycinate",
                "18-25mg daily (with vitamin C)",
                &[
                    "Supports oxygen transport",
                    "Prevents iron deficiency anemia",
                    "Improves energy levels",
                    "Better absorbed than other forms",
                ],
                "Iron deficiency is a common cause of fatigue, especially in women. This chelated form is gentle and well-absorbed.",
                &[
                    "Get iron levels tested before supplementing",
                    "Can cause constipation or stomach upset",
                    "Take on empty stomach for best absorption",
                ],
                90.0,
            ),
            supplement(
                "Vitamin B12 (Methylcobalamin)",
                "1000-2000mcg daily",
                &[
                    "Supports energy metabolism",
                    "Essential for red blood cell formation",
                    "Supports nervous system function",
                    "May improve cognitive function",
                ],
                "B12 deficiency is common and causes fatigue. Methylcobalamin is the active form that's readily used by the body.",
                &[
                    "Generally very safe",
                    "May interact with certain medications",
                    "Sublingual forms may be better absorbed",
                ],
                85.0,
            ),
            supplement(
                "Rhodiola Rosea",
                "300-600mg daily (3% rosavins, 1% salidroside)",
                &[
                    "Adaptogenic herb that combats stress",
                    "May improve physical and mental performance",
                    "Supports adrenal function",
                    "May reduce fatigue from stress",
                ],
                "Rhodiola is an adaptogen that helps the body cope with stress and may improve energy levels and reduce fatigue.",
                &[
                    "May cause jitteriness in some people",
                    "Take in the morning to avoid sleep issues",
                    "Quality varies between brands",
                ],
                70.0,
            ),
        ],
    )
}

fn stress() -> RecommendationRecord {
    record(
        "These supplements work through different pathways to help manage stress response, promote relaxation, and support the nervous system.",
        "Chronic stress requires comprehensive management. These supplements should complement, not replace, stress management techniques and professional support when needed.",
        vec![
            supplement(
                "Ashwagandha (KSM-66)",
                "300-600mg daily",
                &[
                    "Reduces cortisol levels",
                    "Adaptogenic properties",
                    "May improve stress resilience",
                    "Supports sleep quality",
                ],
                "Ashwagandha is a well-researched adaptogen that helps regulate the stress response and lower cortisol levels.",
                &[
                    "May interact with thyroid medications",
                    "Avoid during pregnancy",
                    "May cause drowsiness in some people",
                ],
                90.0,
            ),
            supplement(
                "L-Theanine",
                "100-200mg daily",
                &[
                    "Promotes relaxation without drowsiness",
                    "May reduce anxiety",
                    "Supports focus and attention",
                    "Works synergistically with caffeine",
                ],
                "L-theanine increases alpha brain waves associated with relaxation while maintaining alertness.",
                &[
                    "Generally very safe",
                    "May enhance effects of sedatives",
                    "Take on empty stomach for best results",
                ],
                85.0,
            ),
            supplement(
                "Magnesium Glycinate",
                "200-400mg daily",
                &[
                    "Supports nervous system function",
                    "May reduce anxiety and stress",
                    "Promotes muscle relaxation",
                    "Supports better sleep",
                ],
                "Magnesium is involved in over 300 enzymatic reactions and helps regulate the nervous system and stress response.",
                &[
                    "May cause digestive upset in high doses",
                    "Take with food if stomach sensitive",
                    "Start with lower doses",
                ],
                80.0,
            ),
        ],
    )
}

fn joint_pain() -> RecommendationRecord {
    record(
        "These supplements target inflammation, cartilage health, and joint mobility through different mechanisms to help manage joint discomfort.",
        "Joint pain can have many causes. Consult with a healthcare provider for proper diagnosis and treatment, especially for persistent or severe pain.",
        vec![
            supplement(
                "Curcumin (with Piperine)",
                "500-1000mg daily",
                &[
                    "Powerful anti-inflammatory effects",
                    "May reduce joint pain and stiffness",
                    "Antioxidant properties",
                    "Supports overall joint health",
                ],
                "Curcumin is a potent anti-inflammatory compound that may help reduce joint inflammation and pain.",
                &[
                    "May interact with blood thinners",
                    "Can increase bleeding risk",
                    "Take with food and black pepper for absorption",
                ],
                85.0,
            ),
            supplement(
                "Glucosamine Sulfate",
                "1500mg daily",
                &[
                    "Supports cartilage structure",
                    "May slow cartilage breakdown",
                    "Supports joint mobility",
                    "May reduce joint pain over time",
                ],
                "Glucosamine is a building block of cartilage and may help maintain joint structure and function.",
                &[
                    "Effects may take 2-3 months to notice",
                    "May affect blood sugar in diabetics",
                    "Derived from shellfish (allergy concern)",
                ],
                75.0,
            ),
            supplement(
                "Omega-3 Fatty Acids (EPA/DHA)",
                "2-3g daily (combined EPA/DHA)",
                &[
                    "Anti-inflammatory effects",
                    "May reduce joint stiffness",
                    "Supports overall health",
                    "May reduce inflammatory markers",
                ],
                "Omega-3s have anti-inflammatory properties that may help reduce joint inflammation and pain.",
                &[
                    "May increase bleeding risk",
                    "Choose high-quality, tested products",
                    "Take with meals to reduce fishy aftertaste",
                ],
                80.0,
            ),
        ],
    )
}

fn sleep_issues() -> RecommendationRecord {
    record(
        "These supplements work through different pathways to promote relaxation, regulate sleep cycles, and improve sleep quality naturally.",
        "Chronic sleep issues may indicate underlying conditions. Consult a healthcare provider if sleep problems persist despite good sleep hygiene.",
        vec![
            supplement(
                "Melatonin",
                "0.5-3mg, 30 minutes before bed",
                &[
                    "Regulates sleep-wake cycle",
                    "May reduce time to fall asleep",
                    "Supports natural circadian rhythm",
                    "Antioxidant properties",
                ],
                "Melatonin is the body's natural sleep hormone and can help regulate disrupted sleep patterns.",
                &[
                    "Start with lowest effective dose",
                    "May cause morning grogginess",
                    "Can interact with certain medications",
                ],
                90.0,
            ),
            supplement(
                "Magnesium Glycinate",
                "200-400mg before bed",
                &[
                    "Promotes muscle relaxation",
                    "Supports nervous system calm",
                    "May improve sleep quality",
                    "Helps with stress-related sleep issues",
                ],
                "Magnesium helps activate the parasympathetic nervous system, promoting relaxation and better sleep.",
                &[
                    "May cause digestive upset in high doses",
                    "Take 1-2 hours before bed",
                    "Start with lower doses",
                ],
                85.0,
            ),
            supplement(
                "L-Theanine",
                "100-200mg before bed",
                &[
                    "Promotes relaxation without sedation",
                    "May reduce racing thoughts",
                    "Supports calm alertness during day",
                    "Works well with other sleep aids",
                ],
                "L-theanine promotes alpha brain waves associated with relaxation and may help quiet an overactive mind.",
                &[
                    "Generally very safe",
                    "May enhance effects of sleep medications",
                    "Take on empty stomach for best absorption",
                ],
                80.0,
            ),
        ],
    )
}

fn digestive_issues() -> RecommendationRecord {
    record(
        "These supplements support digestive health through different mechanisms including gut microbiome balance, digestive enzyme support, and gut lining health.",
        "Persistent digestive issues may indicate underlying conditions requiring medical evaluation. These supplements should complement, not replace, proper medical care.",
        vec![
            supplement(
                "Multi-Strain Probiotic",
                "10-50 billion CFU daily",
                &[
                    "Supports healthy gut microbiome",
                    "May improve digestive function",
                    "Supports immune system",
                    "May reduce bloating and gas",
                ],
                "Probiotics help maintain a healthy balance of gut bacteria, which is essential for proper digestion and overall health.",
                &[
                    "Start with lower doses to avoid digestive upset",
                    "Keep refrigerated if required",
                    "Quality varies significantly between brands",
                ],
                85.0,
            ),
            supplement(
                "Digestive Enzymes",
                "1-2 capsules with meals",
                &[
                    "Supports protein, fat, and carb digestion",
                    "May reduce bloating after meals",
                    "Helps with nutrient absorption",
                    "May reduce digestive discomfort",
                ],
                "Digestive enzymes help break down food more efficiently, reducing digestive stress and improving nutrient absorption.",
                &[
                    "Take with meals for best results",
                    "May not be suitable for certain conditions",
                    "Start with meals that typically cause issues",
                ],
                75.0,
            ),
            supplement(
                "L-Glutamine",
                "5-10g daily",
                &[
                    "Supports gut lining health",
                    "May help heal leaky gut",
                    "Supports immune function",
                    "May reduce inflammation",
                ],
                "L-glutamine is the primary fuel for intestinal cells and helps maintain the integrity of the gut lining.",
                &[
                    "Generally well tolerated",
                    "Take on empty stomach for best absorption",
                    "May interact with certain medications",
                ],
                70.0,
            ),
        ],
    )
}

fn unmatched() -> RecommendationRecord {
    record(
        "We couldn't find specific recommendations for your symptoms. Please consult with a healthcare professional for personalized advice.",
        "This is a general response. For specific health concerns, always consult with a qualified healthcare provider.",
        vec![supplement(
            "Multivitamin",
            "As directed on label",
            &[
                "Covers basic nutritional needs",
                "Supports overall health",
                "May help fill dietary gaps",
                "Convenient daily nutrition",
            ],
            "A high-quality multivitamin can help ensure you're getting essential nutrients that support overall health.",
            &[
                "Choose high-quality brands",
                "Take with food to reduce stomach upset",
                "May interact with certain medications",
            ],
            60.0,
        )],
    )
}
