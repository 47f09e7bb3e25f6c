//! CLI form: collect profile fields from flags, prompting on a terminal for any that are missing.

use crate::cli::parse::ProfileArgs;
use crate::error::AppError;
use crate::profile::{
    age_in_bounds, weight_in_bounds, Gender, ProfileInput, MAX_AGE, MAX_WEIGHT_KG, MIN_AGE,
    MIN_WEIGHT_KG,
};

/// Form values taken from flags only. Goal text is trimmed.
pub fn input_from_args(args: &ProfileArgs) -> ProfileInput {
    ProfileInput {
        gender: args.gender,
        age: args.age,
        weight: args.weight,
        goal: args.goal.as_deref().map(|goal| goal.trim().to_string()),
    }
}

/// Collect the form. When `interactive`, fields without a flag value are prompted for.
pub fn collect_profile(args: &ProfileArgs, interactive: bool) -> Result<ProfileInput, AppError> {
    let mut input = input_from_args(args);
    if !interactive {
        return Ok(input);
    }

    if input.gender.is_none() {
        input.gender = Some(prompt_gender()?);
    }
    if input.age.is_none() {
        input.age = Some(prompt_age()?);
    }
    if input.weight.is_none() {
        input.weight = Some(prompt_weight()?);
    }
    if input.goal.is_none() {
        input.goal = Some(prompt_goal()?);
    }

    Ok(input)
}

fn input_error(e: dialoguer::Error) -> AppError {
    AppError::Input(format!("Failed to get user input: {}", e))
}

fn prompt_gender() -> Result<Gender, AppError> {
    use dialoguer::Select;

    let labels: Vec<&str> = Gender::ALL.iter().map(|g| g.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(input_error)?;

    Ok(Gender::ALL[selection])
}

fn prompt_age() -> Result<u32, AppError> {
    use dialoguer::Input;

    Input::<u32>::new()
        .with_prompt(format!("Age ({}-{})", MIN_AGE, MAX_AGE))
        .validate_with(|age: &u32| -> Result<(), String> {
            if age_in_bounds(*age) {
                Ok(())
            } else {
                Err(format!("Age must be between {} and {}", MIN_AGE, MAX_AGE))
            }
        })
        .interact_text()
        .map_err(input_error)
}

fn prompt_weight() -> Result<f64, AppError> {
    use dialoguer::Input;

    Input::<f64>::new()
        .with_prompt(format!(
            "Weight in kg ({:.1}-{:.1})",
            MIN_WEIGHT_KG, MAX_WEIGHT_KG
        ))
        .validate_with(|weight: &f64| -> Result<(), String> {
            if weight_in_bounds(*weight) {
                Ok(())
            } else {
                Err(format!(
                    "Weight must be between {:.1} and {:.1} kg",
                    MIN_WEIGHT_KG, MAX_WEIGHT_KG
                ))
            }
        })
        .interact_text()
        .map_err(input_error)
}

fn prompt_goal() -> Result<String, AppError> {
    use dialoguer::Input;

    let goal: String = Input::new()
        .with_prompt("Fitness goal (e.g. weight loss, muscle gain, general fitness)")
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)?;

    Ok(goal.trim().to_string())
}
