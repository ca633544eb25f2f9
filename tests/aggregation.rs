//! Library-level aggregation scenarios.

use caltrack::{BalanceLabel, CalorieForm, Category, InputError, Report};

fn sample_form() -> CalorieForm {
    let mut form = CalorieForm::new();
    form.add_entry(Category::Breakfast, "Oatmeal", "300");
    form.add_entry(Category::Breakfast, "Yogurt", "200");
    form.add_entry(Category::Lunch, "Sandwich", "500");
    form.add_entry(Category::Dinner, "Pasta", "700");
    form.add_entry(Category::Snacks, "Apple", "100");
    form.add_entry(Category::Exercise, "Run", "250");
    form
}

#[test]
fn test_budget_2000_is_a_450_deficit() {
    let mut form = sample_form();
    form.set_budget("2000");

    let report = Report::from_form(&form).expect("valid form aggregates");
    assert_eq!(report.consumed, 1800.0);
    assert_eq!(report.burned, 250.0);
    assert_eq!(report.remaining, 450.0);
    assert_eq!(report.label(), BalanceLabel::Deficit);
    assert_eq!(report.displayed(), 450.0);
}

#[test]
fn test_budget_1500_is_a_50_surplus() {
    let mut form = sample_form();
    form.set_budget("1500");

    let report = Report::from_form(&form).expect("valid form aggregates");
    assert_eq!(report.remaining, -50.0);
    assert_eq!(report.label(), BalanceLabel::Surplus);
    assert_eq!(report.displayed(), 50.0);
}

#[test]
fn test_entry_order_does_not_change_the_sum() {
    let mut forward = CalorieForm::new();
    forward.set_budget("2000");
    forward.add_entry(Category::Lunch, "Soup", "150");
    forward.add_entry(Category::Lunch, "Bread", "90.5");
    forward.add_entry(Category::Lunch, "Cheese", "210");

    let mut backward = CalorieForm::new();
    backward.set_budget("2000");
    backward.add_entry(Category::Lunch, "Cheese", "210");
    backward.add_entry(Category::Lunch, "Bread", "90.5");
    backward.add_entry(Category::Lunch, "Soup", "150");

    let a = Report::from_form(&forward).expect("valid form aggregates");
    let b = Report::from_form(&backward).expect("valid form aggregates");
    assert_eq!(a, b);
}

#[test]
fn test_scientific_notation_anywhere_aborts() {
    for category in Category::ALL {
        let mut form = sample_form();
        form.set_budget("2000");
        form.add_entry(category, "Bad", "5e3");

        let err = Report::from_form(&form).expect_err("bad value must abort");
        assert_eq!(err.token(), "5e3");
        assert!(err.to_string().contains("5e3"));
    }
}

#[test]
fn test_sign_and_whitespace_tolerant_values() {
    let mut form = CalorieForm::new();
    form.set_budget(" 2 000 ");
    form.add_entry(Category::Breakfast, "Oatmeal", "+300");
    form.add_entry(Category::Exercise, "Run", "-250");

    let report = Report::from_form(&form).expect("cleaned values aggregate");
    assert_eq!(report.budget, 2000.0);
    assert_eq!(report.consumed, 300.0);
    assert_eq!(report.burned, 250.0);
    assert_eq!(report.remaining, 1950.0);
}

#[test]
fn test_unfilled_values_count_as_zero() {
    let mut form = CalorieForm::new();
    form.add_entry(Category::Dinner, "Unknown", "");

    let report = Report::from_form(&form).expect("empty values are zero");
    assert_eq!(report.consumed, 0.0);
    assert_eq!(report.remaining, 0.0);
    assert_eq!(report.label(), BalanceLabel::Deficit);
}

#[test]
fn test_stray_letters_are_an_explicit_error() {
    let mut form = CalorieForm::new();
    form.set_budget("2000");
    form.add_entry(Category::Snacks, "Mystery", "12kcal");

    match Report::from_form(&form) {
        Err(InputError::Malformed { raw }) => assert_eq!(raw, "12kcal"),
        other => panic!("expected a malformed-input error, got {other:?}"),
    }
}

#[test]
fn test_clear_then_recompute_is_all_zero() {
    let mut form = sample_form();
    form.set_budget("2000");
    form.clear();

    let report = Report::from_form(&form).expect("empty form aggregates");
    assert_eq!(report.budget, 0.0);
    assert_eq!(report.consumed, 0.0);
    assert_eq!(report.burned, 0.0);
}
