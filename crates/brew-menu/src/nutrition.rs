//! Nutrition facts and their field-wise combinator.

use serde::{Deserialize, Serialize};

/// Nutritional value of a product or ingredient variation.
///
/// Every field is independently present or absent. An absent field means the
/// menu did not report it, which is not the same as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Fat in grams.
    #[serde(rename = "fats", default)]
    pub fat: Option<f64>,
    /// Protein in grams.
    #[serde(rename = "proteins", default)]
    pub protein: Option<f64>,
    /// Carbohydrate in grams.
    #[serde(rename = "carbohydrates", default)]
    pub carbohydrate: Option<f64>,
    /// Energy in kilocalories.
    #[serde(rename = "kiloCalories", default)]
    pub kilocalories: Option<f64>,
    /// Weight in grams.
    #[serde(default)]
    pub weight: Option<f64>,
}

impl NutritionFacts {
    /// Facts with every field absent. This is the identity of [`combine`](Self::combine).
    pub fn absent() -> Self {
        Self::default()
    }

    /// Check whether no field carries a value.
    pub fn is_absent(&self) -> bool {
        self.fat.is_none()
            && self.protein.is_none()
            && self.carbohydrate.is_none()
            && self.kilocalories.is_none()
            && self.weight.is_none()
    }

    pub fn with_fat(mut self, grams: f64) -> Self {
        self.fat = Some(grams);
        self
    }

    pub fn with_protein(mut self, grams: f64) -> Self {
        self.protein = Some(grams);
        self
    }

    pub fn with_carbohydrate(mut self, grams: f64) -> Self {
        self.carbohydrate = Some(grams);
        self
    }

    pub fn with_kilocalories(mut self, kcal: f64) -> Self {
        self.kilocalories = Some(kcal);
        self
    }

    pub fn with_weight(mut self, grams: f64) -> Self {
        self.weight = Some(grams);
        self
    }

    /// Combine two facts field by field.
    ///
    /// Both present: summed. One present: kept. Neither: absent.
    pub fn combine(&self, other: &NutritionFacts) -> NutritionFacts {
        NutritionFacts {
            fat: combine_field(self.fat, other.fat),
            protein: combine_field(self.protein, other.protein),
            carbohydrate: combine_field(self.carbohydrate, other.carbohydrate),
            kilocalories: combine_field(self.kilocalories, other.kilocalories),
            weight: combine_field(self.weight, other.weight),
        }
    }

    /// Fold any number of facts with [`combine`](Self::combine).
    pub fn fold<'a>(facts: impl IntoIterator<Item = &'a NutritionFacts>) -> NutritionFacts {
        facts
            .into_iter()
            .fold(NutritionFacts::absent(), |acc, f| acc.combine(f))
    }
}

fn combine_field(lhs: Option<f64>, rhs: Option<f64>) -> Option<f64> {
    match (lhs, rhs) {
        (Some(l), Some(r)) => Some(l + r),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_sums_present_fields() {
        let a = NutritionFacts::absent().with_kilocalories(100.0).with_fat(2.0);
        let b = NutritionFacts::absent().with_kilocalories(50.0).with_fat(5.0);
        let c = a.combine(&b);
        assert_eq!(c.kilocalories, Some(150.0));
        assert_eq!(c.fat, Some(7.0));
    }

    #[test]
    fn test_combine_keeps_one_sided_fields() {
        let a = NutritionFacts::absent().with_protein(3.0);
        let b = NutritionFacts::absent().with_weight(250.0);
        let c = a.combine(&b);
        assert_eq!(c.protein, Some(3.0));
        assert_eq!(c.weight, Some(250.0));
        assert_eq!(c.fat, None);
    }

    #[test]
    fn test_absent_is_identity() {
        let a = NutritionFacts::absent().with_carbohydrate(12.5);
        assert_eq!(a.combine(&NutritionFacts::absent()), a);
        assert_eq!(NutritionFacts::absent().combine(&a), a);
        assert!(NutritionFacts::absent().is_absent());
    }

    #[test]
    fn test_zero_is_not_absent() {
        let zero = NutritionFacts::absent().with_fat(0.0);
        assert!(!zero.is_absent());
        assert_eq!(zero.combine(&NutritionFacts::absent()).fat, Some(0.0));
    }

    #[test]
    fn test_fold_combines_all() {
        let items = vec![
            NutritionFacts::absent().with_kilocalories(10.0),
            NutritionFacts::absent().with_kilocalories(20.0).with_fat(1.0),
        ];
        let folded = NutritionFacts::fold(&items);
        assert_eq!(folded.kilocalories, Some(30.0));
        assert_eq!(folded.fat, Some(1.0));
        assert!(NutritionFacts::fold(std::iter::empty()).is_absent());
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"fats": 1.5, "kiloCalories": 120}"#;
        let facts: NutritionFacts = serde_json::from_str(json).unwrap();
        assert_eq!(facts.fat, Some(1.5));
        assert_eq!(facts.kilocalories, Some(120.0));
        assert_eq!(facts.protein, None);
    }
}
