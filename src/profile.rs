//! Fitness Profile
//!
//! The value object handed to the plan generator, and the raw form input it is built from.
//! Bounds on age and weight are enforced by the input layer; the profile itself does not
//! re-validate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;
pub const MIN_WEIGHT_KG: f64 = 1.0;
pub const MAX_WEIGHT_KG: f64 = 200.0;

/// Gender as offered by the form (binary choice)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" | "m" => Ok(Gender::Male),
            "F" | "f" => Ok(Gender::Female),
            other => Err(format!("invalid gender '{}' (expected M or F)", other)),
        }
    }
}

/// A complete fitness profile. Built once per submission and consumed by one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessProfile {
    gender: Gender,
    age: u32,
    weight: f64,
    goal: String,
}

impl FitnessProfile {
    pub fn new(gender: Gender, age: u32, weight: f64, goal: impl Into<String>) -> Self {
        Self {
            gender,
            age,
            weight,
            goal: goal.into(),
        }
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Weight in kilograms
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }
}

/// Raw form values, any of which may still be missing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileInput {
    pub gender: Option<Gender>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub goal: Option<String>,
}

impl ProfileInput {
    /// True iff all four fields are present and truthy (non-zero, non-empty).
    pub fn is_complete(&self) -> bool {
        self.gender.is_some()
            && self.age.is_some_and(|age| age != 0)
            && self.weight.is_some_and(|weight| weight != 0.0)
            && self.goal.as_deref().is_some_and(|goal| !goal.is_empty())
    }

    /// Names of the fields that keep the input from being complete, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.gender.is_none() {
            missing.push("gender");
        }
        if !self.age.is_some_and(|age| age != 0) {
            missing.push("age");
        }
        if !self.weight.is_some_and(|weight| weight != 0.0) {
            missing.push("weight");
        }
        if !self.goal.as_deref().is_some_and(|goal| !goal.is_empty()) {
            missing.push("goal");
        }
        missing
    }

    /// Build the profile, or `None` when the input is incomplete.
    pub fn into_profile(self) -> Option<FitnessProfile> {
        if !self.is_complete() {
            return None;
        }
        match (self.gender, self.age, self.weight, self.goal) {
            (Some(gender), Some(age), Some(weight), Some(goal)) => {
                Some(FitnessProfile::new(gender, age, weight, goal))
            }
            _ => None,
        }
    }
}

pub fn age_in_bounds(age: u32) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}

pub fn weight_in_bounds(weight: f64) -> bool {
    (MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight)
}
