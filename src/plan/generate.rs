//! Plan generation: expands extracted recommendations into an age-ordered
//! series of product- and professional-matched plan entries.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::models::{PlanEntry, Product, Professional, RecommendationSet, UserProfile};

use super::types::PlanError;
use super::PlanPolicy;

/// Completed years between `dob` and `today`: one less than the calendar
/// difference until this year's anniversary has passed.
pub(crate) fn age_in_years(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Parse the user store's dob string: a plain ISO date or a full RFC 3339
/// timestamp.
pub(crate) fn parse_dob(value: &str) -> Result<NaiveDate, PlanError> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|e| PlanError::InvalidDateOfBirth {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Case-insensitive substring match in either direction.
fn labels_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Expand `recommendations` into concrete plan entries for `user` as of
/// `today`. Screenings without a product match or below their starting age
/// drop silently; consultations without a professional match are kept with
/// a null identity. The result is stably sorted ascending by age.
pub(crate) fn expand_plan(
    recommendations: &RecommendationSet,
    user: &UserProfile,
    products: &[Product],
    professionals: &[Professional],
    policy: &PlanPolicy,
    today: NaiveDate,
) -> Result<Vec<PlanEntry>, PlanError> {
    let dob = parse_dob(&user.dob)?;
    let user_age = age_in_years(dob, today);
    let birth_year = dob.year();

    let mut plan: Vec<PlanEntry> = Vec::new();

    for screening in &recommendations.recommended_screenings {
        // First catalog match wins; no ranking.
        let product = products
            .iter()
            .find(|p| labels_overlap(&p.name, &screening.test));
        let Some(product) = product else {
            tracing::warn!(test = %screening.test, "no matching product for screening, dropped");
            continue;
        };
        if user_age < screening.starting_age as i32 {
            tracing::warn!(
                test = %screening.test,
                user_age,
                starting_age = screening.starting_age,
                "user below screening starting age, dropped"
            );
            continue;
        }
        for i in 0..policy.screening_occurrences {
            let age = user_age + i as i32;
            plan.push(PlanEntry::Test {
                test: screening.test.clone(),
                age,
                year: birth_year + age,
                product_id: product.id.clone(),
                product_name: product.name.clone(),
            });
        }
    }

    for consultation in &recommendations.specialist_consultations {
        let professional = professionals.iter().find(|p| {
            p.speciality
                .iter()
                .any(|s| labels_overlap(s, &consultation.speciality))
        });
        if professional.is_none() {
            tracing::warn!(
                speciality = %consultation.speciality,
                "no matching professional, scheduling consultation without one"
            );
        }
        plan.push(PlanEntry::Consultation {
            speciality: consultation.speciality.clone(),
            age: policy.consultation_age,
            year: birth_year + policy.consultation_age,
            professional_id: professional.map(|p| p.id.clone()),
            professional_name: professional.map(|p| p.full_name()),
        });
    }

    // Stable sort: entries sharing an age keep their source order.
    plan.sort_by_key(PlanEntry::age);

    tracing::debug!(user = %user.id, entries = plan.len(), user_age, "expanded plan");
    Ok(plan)
}
