use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const DAILY_TIPS: [&str; 8] = [
    "Drink water before meals to aid digestion and control portion sizes.",
    "Eat the rainbow - colorful fruits and vegetables provide diverse nutrients.",
    "Practice mindful eating by putting down your fork between bites.",
    "Include protein in every meal to maintain stable blood sugar levels.",
    "Take a 10-minute walk after eating to improve glucose metabolism.",
    "Store healthy snacks at eye level to make better choices easier.",
    "Read food labels - avoid items with more than 5 ingredients.",
    "Prep meals on weekends to avoid unhealthy last-minute decisions.",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailyTip {
    pub index: usize,
    pub tip: String,
    pub next_index: usize,
}

/// Tip at `index`, wrapping around the list.
pub fn tip_of_the_day(index: usize) -> DailyTip {
    let index = index % DAILY_TIPS.len();

    DailyTip {
        index,
        tip: DAILY_TIPS[index].to_string(),
        next_index: (index + 1) % DAILY_TIPS.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tip() {
        let tip = tip_of_the_day(0);
        assert_eq!(tip.index, 0);
        assert_eq!(tip.next_index, 1);
        assert!(tip.tip.starts_with("Drink water"));
    }

    #[test]
    fn test_tips_wrap_around() {
        assert_eq!(tip_of_the_day(7).next_index, 0);
        assert_eq!(tip_of_the_day(8), tip_of_the_day(0));
        assert_eq!(tip_of_the_day(usize::MAX).index, usize::MAX % 8);
    }
}
