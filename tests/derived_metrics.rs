use fittrack::core::account::Account;
use fittrack::core::meal::{CalorieStatus, MealPlan, MealSlot, NutritionGoal};
use fittrack::core::store::UserStore;
use fittrack::core::validate;
use fittrack::core::workout::{Intensity, Workout, WorkoutCategory};

#[test]
fn workout_calorie_table_examples() {
    let running = Workout::new("running", WorkoutCategory::Cardio, 30, Intensity::Medium, None, None, None);
    assert_eq!(running.calories_burned, 360);

    let yoga = Workout::new("yoga", WorkoutCategory::Flexibility, 60, Intensity::Low, None, None, None);
    assert_eq!(yoga.calories_burned, 144);
}

#[test]
fn workout_calories_follow_mutations() {
    let mut workout = Workout::new("cycling", WorkoutCategory::Cardio, 30, Intensity::Medium, None, None, None);
    assert_eq!(workout.calories_burned, 300);
    workout.set_intensity(Intensity::High);
    assert_eq!(workout.calories_burned, 390);
    workout.set_duration(10);
    assert_eq!(workout.calories_burned, 130);
}

#[test]
fn meal_status_boundaries_are_inclusive() {
    // oatmeal 150 + burger 500 + pizza 450 = 1100 estimated
    let build = |target: u32| {
        let mut plan = MealPlan::new(1, None, NutritionGoal::Maintenance, Some(target), "");
        plan.set_meal(MealSlot::Breakfast, "oatmeal");
        plan.set_meal(MealSlot::Lunch, "burger");
        plan.set_meal(MealSlot::Dinner, "pizza");
        plan
    };

    assert_eq!(build(1100).calorie_status().status, CalorieStatus::OnTrack);
    assert_eq!(build(1000).calorie_status().status, CalorieStatus::OnTrack);
    assert_eq!(build(1200).calorie_status().status, CalorieStatus::OnTrack);
    assert_eq!(build(999).calorie_status().status, CalorieStatus::OverTarget);
    assert_eq!(build(1201).calorie_status().status, CalorieStatus::UnderTarget);
}

#[test]
fn default_target_for_muscle_gain() {
    let plan = MealPlan::new(1, None, NutritionGoal::MuscleGain, None, "");
    assert_eq!(plan.target_calories, 2500);
}

#[test]
fn completeness_ignores_snack() {
    let mut plan = MealPlan::new(1, None, NutritionGoal::Maintenance, None, "");
    plan.set_meal(MealSlot::Breakfast, "eggs");
    plan.set_meal(MealSlot::Lunch, "salad");
    plan.set_meal(MealSlot::Dinner, "salmon");
    assert!(plan.is_complete());

    assert!(plan.remove_meal(MealSlot::Dinner));
    plan.set_meal(MealSlot::Snack, "apple");
    assert!(!plan.is_complete());
}

#[test]
fn digest_equality_tracks_password_equality() {
    assert_eq!(UserStore::hash_password("pw1"), UserStore::hash_password("pw1"));
    assert_ne!(UserStore::hash_password("pw1"), UserStore::hash_password("pw2"));
    assert_eq!(UserStore::hash_password("pw1").len(), 64);
}

#[test]
fn record_round_trips_preserve_all_fields() {
    let mut account = Account::new("annak", "Anna K", 29, 70.0, Some(65.0), 4);
    account.workouts.push(Workout::new("running", WorkoutCategory::Cardio, 30, Intensity::Medium, None, None, Some("tempo run".to_string())));
    let mut plan = MealPlan::new(2, None, NutritionGoal::Endurance, None, "race week");
    plan.set_meal(MealSlot::Breakfast, "oatmeal");
    plan.set_meal(MealSlot::Snack, "banana");
    account.meals.push(plan);

    let value = serde_json::to_value(&account).unwrap();
    let back: Account = serde_json::from_value(value).unwrap();
    assert_eq!(back, account);
}

#[test]
fn weight_progress_direction_and_goal() {
    let mut account = Account::new("annak", "Anna K", 29, 70.0, Some(65.0), 3);
    let progress = account.weight_progress();
    assert_eq!(progress.direction, "lose");
    assert!(!progress.at_goal);

    account.weight = 65.0;
    assert!(account.weight_progress().at_goal);

    account.weight = 60.0;
    assert_eq!(account.weight_progress().direction, "gain");
}

#[test]
fn validators_reject_out_of_range_fields() {
    assert!(validate::username("ok").is_err());
    assert_eq!(validate::username(" NewUser1 ").unwrap(), "newuser1");
    assert!(validate::age("12").is_err());
    assert!(validate::weight_kg("2.0").is_err());
    assert!(validate::weight_kg("1001").is_err());
    assert_eq!(validate::display_name("jo anne").unwrap(), "Jo Anne");
}

#[test]
fn quick_workouts_detect_category() {
    assert_eq!(Workout::quick("swimming", 40).category, WorkoutCategory::Cardio);
    assert_eq!(Workout::quick("deadlifts", 25).category, WorkoutCategory::Strength);
    assert_eq!(Workout::quick("foam rolling", 15).category, WorkoutCategory::Flexibility);
}
