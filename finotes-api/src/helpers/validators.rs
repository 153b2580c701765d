use anyhow::{bail, Result};
use chrono::NaiveDate;
use shared_types::{ChatTurnRequest, CreateExpenseRequest, UpdateProfileRequest};

pub fn validate_expense(request: &CreateExpenseRequest) -> Result<()> {
    if request.category.trim().is_empty() {
        bail!("Category is required");
    }

    if request.description.trim().is_empty() {
        bail!("Description is required");
    }

    validate_amount(request.amount)?;

    if let Some(date) = &request.occurred_on {
        validate_date(date)?;
    }

    Ok(())
}

pub fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        bail!("Amount must be greater than 0");
    }
    Ok(())
}

pub fn validate_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}', expected YYYY-MM-DD", date))
}

pub fn validate_date_range(start_date: &str, end_date: &str) -> Result<()> {
    let start = validate_date(start_date)?;
    let end = validate_date(end_date)?;

    if start > end {
        bail!("start_date must not be after end_date");
    }
    Ok(())
}

pub fn validate_chat_turn(request: &ChatTurnRequest) -> Result<()> {
    if request.user_message.trim().is_empty() {
        bail!("user_message must not be empty");
    }
    if request.assistant_reply.trim().is_empty() {
        bail!("assistant_reply must not be empty");
    }
    Ok(())
}

pub fn validate_profile_update(update: &UpdateProfileRequest) -> Result<()> {
    if let Some(name) = &update.name {
        if name.trim().is_empty() {
            bail!("Name must not be empty");
        }
    }

    if let Some(email) = &update.email {
        let email = email.trim();
        let valid = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && !domain.is_empty());
        if !valid {
            bail!("Invalid email address");
        }
    }

    if let Some(currency) = &update.currency {
        if currency.trim().is_empty() {
            bail!("Currency must not be empty");
        }
    }

    Ok(())
}
