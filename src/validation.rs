//! Field rules for customer and item payloads.
//!
//! Rules return a fixed message from [`errmsg`]; the actors wrap it in their
//! `Validation` error and the HTTP layer returns it verbatim in the 400 body.

/// Length limits for validated fields.
pub mod limits {
    pub const NAME_MIN: usize = 3;
    pub const NAME_MAX: usize = 20;
    pub const ADDRESS_MAX: usize = 100;
    pub const MOBILE_DIGITS: usize = 10;
    pub const DESCRIPTION_MAX: usize = 50;
}

/// Messages returned for validation failures.
pub mod errmsg {
    pub const NAME_REQUIRED: &str = "Name is required";
    pub const NAME_INVALID: &str =
        "Name must only contain letters and be between 3 and 20 characters long";
    pub const MOBILE_REQUIRED: &str = "Mobile number is required";
    pub const MOBILE_INVALID: &str = "Mobile must be exactly 10 digits";
    pub const ADDRESS_REQUIRED: &str = "Address is required";
    pub const ADDRESS_INVALID: &str =
        "Address can only contain letters, digits, commas, spaces, and must be max 100 characters";
    pub const PROFILE_PIC_REQUIRED: &str = "Profile picture is required";

    pub const DESCRIPTION_REQUIRED: &str = "Description is required";
    pub const DESCRIPTION_TOO_LONG: &str = "Description must be 50 characters or less";
    pub const PRICE_NOT_POSITIVE: &str = "Price must be a positive number";
    pub const QTY_NEGATIVE: &str = "Quantity cannot be negative";
    pub const QTY_TOO_LARGE: &str = "Quantity is too large";
}

/// 3 to 20 ASCII letters or spaces.
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let len = name.chars().count();
    if !(limits::NAME_MIN..=limits::NAME_MAX).contains(&len) {
        return Err(errmsg::NAME_INVALID);
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(errmsg::NAME_INVALID);
    }
    Ok(())
}

/// `0` followed by nine digits.
pub fn validate_mobile(mobile: &str) -> Result<(), &'static str> {
    let valid = mobile.len() == limits::MOBILE_DIGITS
        && mobile.starts_with('0')
        && mobile.chars().all(|c| c.is_ascii_digit());
    if valid {
        Ok(())
    } else {
        Err(errmsg::MOBILE_INVALID)
    }
}

/// 1 to 100 characters from letters, digits, commas and spaces.
pub fn validate_address(address: &str) -> Result<(), &'static str> {
    if address.is_empty() {
        return Err(errmsg::ADDRESS_REQUIRED);
    }
    if address.chars().count() > limits::ADDRESS_MAX {
        return Err(errmsg::ADDRESS_INVALID);
    }
    if !address
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ',' || c == ' ')
    {
        return Err(errmsg::ADDRESS_INVALID);
    }
    Ok(())
}

pub fn validate_profile_pic(encoded: &str) -> Result<(), &'static str> {
    if encoded.is_empty() {
        return Err(errmsg::PROFILE_PIC_REQUIRED);
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), &'static str> {
    if description.is_empty() {
        return Err(errmsg::DESCRIPTION_REQUIRED);
    }
    if description.chars().count() > limits::DESCRIPTION_MAX {
        return Err(errmsg::DESCRIPTION_TOO_LONG);
    }
    Ok(())
}

/// Finite and strictly positive.
pub fn validate_price(price: f64) -> Result<(), &'static str> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(errmsg::PRICE_NOT_POSITIVE)
    }
}

/// Converts a wire quantity into stock units.
pub fn validate_qty(qty: i64) -> Result<u32, &'static str> {
    if qty < 0 {
        return Err(errmsg::QTY_NEGATIVE);
    }
    u32::try_from(qty).map_err(|_| errmsg::QTY_TOO_LARGE)
}
