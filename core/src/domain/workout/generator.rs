use crate::domain::{
    profile::entities::Profile,
    workout::entities::{Exercise, WorkoutPlan},
};

fn exercise(name: &str, sets: u32, reps: &str, rest: Option<&str>) -> Exercise {
    Exercise {
        name: name.to_string(),
        sets,
        reps: reps.to_string(),
        rest: rest.map(str::to_string),
    }
}

pub fn cardio_and_strength() -> WorkoutPlan {
    WorkoutPlan {
        title: "Cardio & Strength".to_string(),
        duration_minutes: 30,
        exercises: vec![
            exercise("Warm-up Walk", 1, "5 minutes", None),
            exercise("Bodyweight Squats", 3, "12-15", Some("60s")),
            exercise("Push-ups (Modified)", 3, "8-10", Some("60s")),
            exercise("Plank Hold", 3, "30s", Some("45s")),
            exercise("Cool-down Stretch", 1, "5 minutes", None),
        ],
        benefits: vec![
            "Improves cardiovascular health".to_string(),
            "Supports weight management".to_string(),
            "Builds functional strength".to_string(),
        ],
    }
}

pub fn low_impact_recovery() -> WorkoutPlan {
    WorkoutPlan {
        title: "Low-Impact Recovery".to_string(),
        duration_minutes: 25,
        exercises: vec![
            exercise("Gentle Yoga Flow", 1, "10 minutes", None),
            exercise("Wall Push-ups", 2, "10", Some("45s")),
            exercise("Seated Leg Extensions", 2, "12 each", Some("45s")),
            exercise("Breathing Exercises", 1, "5 minutes", None),
        ],
        benefits: vec![
            "Reduces stress and anxiety".to_string(),
            "Improves flexibility".to_string(),
            "Supports joint health".to_string(),
        ],
    }
}

/// Hypertension gets the low-impact plan, everyone else the standard one.
pub fn select_workout(profile: &Profile) -> WorkoutPlan {
    if profile.has_condition("Hypertension") {
        low_impact_recovery()
    } else {
        cardio_and_strength()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypertension_selects_low_impact() {
        let plan = select_workout(&Profile::default());
        assert_eq!(plan.title, "Low-Impact Recovery");
        assert_eq!(plan.duration_minutes, 25);
        assert_eq!(plan.exercises.len(), 4);
    }

    #[test]
    fn test_default_plan() {
        let plan = select_workout(&Profile::unrestricted());
        assert_eq!(plan, cardio_and_strength());
        assert_eq!(plan.exercises[0].rest, None);
        assert_eq!(plan.exercises[1].rest.as_deref(), Some("60s"));
    }
}
