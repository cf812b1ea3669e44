//! Validation logic for the storefront forms.
//!
//! Every form is checked here before anything is sent; a failure never
//! reaches the network.

use chrono::NaiveDate;
use shared::models::prescription::{MAX_PRESCRIPTION_BYTES, PRESCRIPTION_EXTENSIONS};
use shared::models::{
    CreateOrderRequest, EmergencyDeliveryRequest, PaymentMethod, ProfileUpdate, RegisterRequest,
};
use thiserror::Error;

use crate::error::ClientError;
use crate::transport::{FilePart, MultipartForm};

/// Validation errors that can occur during form validation.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// Field is required but empty
    #[error("{0} is required")]
    Required(&'static str),
    /// Username is too short (less than 3 characters)
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,
    /// Email address is invalid (missing @ symbol)
    #[error("Please enter a valid email address")]
    InvalidEmail,
    /// Password is too short (less than 8 characters)
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    /// Password confirmation doesn't match password
    #[error("Passwords do not match")]
    PasswordsDoNotMatch,
    #[error("Age must be a whole number")]
    InvalidAge,
    #[error("Prescription date must be a valid date")]
    InvalidDate,
    #[error("Prescription must be a JPG, PNG or PDF file")]
    UnsupportedFileType,
    #[error("Prescription file must be 10 MB or smaller")]
    FileTooLarge,
    #[error("Enter at least one medicine name")]
    NoMedicines,
}

impl From<ValidationError> for ClientError {
    fn from(error: ValidationError) -> Self {
        ClientError::Validation(error.to_string())
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Validates a username.
///
/// # Validation rules
/// - Username must not be empty
/// - Username must be at least 3 characters long
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::Required("Username"));
    }

    if username.trim().chars().count() < 3 {
        return Err(ValidationError::UsernameTooShort);
    }

    Ok(())
}

/// Validates an email address.
///
/// # Validation rules
/// - Email must not be empty
/// - Email must contain an '@' symbol
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required("Email"));
    }

    if !trimmed.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates a password.
///
/// # Validation rules
/// - Password must not be empty
/// - Password must be at least 8 characters long
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::Required("Password"));
    }

    if password.chars().count() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

/// Validates that the password confirmation matches the password.
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if confirm_password.trim().is_empty() {
        return Err(ValidationError::Required("Password confirmation"));
    }

    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }

    Ok(())
}

fn parse_age(age: &str) -> Result<Option<u32>, ValidationError> {
    match optional(age) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ValidationError::InvalidAge),
    }
}

/// Checks a prescription file name and size against what the backend accepts.
pub fn validate_prescription_file(file_name: &str, size: usize) -> Result<(), ValidationError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .ok_or(ValidationError::UnsupportedFileType)?;
    if !PRESCRIPTION_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ValidationError::UnsupportedFileType);
    }
    if size > MAX_PRESCRIPTION_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    Ok(())
}

/// Raw registration form input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub full_name: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub medical_conditions: String,
    pub allergies: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        validate_username(&self.username)?;
        validate_email(&self.email)?;
        let full_name = required(&self.full_name, "Full name")?;
        let phone = required(&self.phone, "Phone")?;
        validate_password(&self.password)?;
        validate_confirm_password(&self.confirm_password, &self.password)?;

        Ok(RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            phone,
            full_name,
            password: self.password.clone(),
            age: parse_age(&self.age)?,
            medical_conditions: optional(&self.medical_conditions),
            allergies: optional(&self.allergies),
        })
    }
}

/// Raw profile form input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileForm {
    pub full_name: String,
    pub phone: String,
    pub age: String,
    pub medical_conditions: String,
    pub allergies: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl ProfileForm {
    pub fn from_update(update: &ProfileUpdate) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            full_name: text(&update.full_name),
            phone: text(&update.phone),
            age: update.age.map(|age| age.to_string()).unwrap_or_default(),
            medical_conditions: text(&update.medical_conditions),
            allergies: text(&update.allergies),
            address: text(&update.address),
            city: text(&update.city),
            state: text(&update.state),
            zip_code: text(&update.zip_code),
        }
    }

    pub fn validate(&self) -> Result<ProfileUpdate, ValidationError> {
        Ok(ProfileUpdate {
            full_name: Some(required(&self.full_name, "Full name")?),
            phone: Some(required(&self.phone, "Phone")?),
            age: parse_age(&self.age)?,
            medical_conditions: optional(&self.medical_conditions),
            allergies: optional(&self.allergies),
            address: optional(&self.address),
            city: optional(&self.city),
            state: optional(&self.state),
            zip_code: optional(&self.zip_code),
        })
    }
}

/// Raw checkout form input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckoutForm {
    pub delivery_address: String,
    pub delivery_phone: String,
    pub payment_method: PaymentMethod,
    pub is_emergency: bool,
    pub delivery_notes: String,
}

impl CheckoutForm {
    pub fn validate(&self) -> Result<CreateOrderRequest, ValidationError> {
        Ok(CreateOrderRequest {
            delivery_address: required(&self.delivery_address, "Delivery address")?,
            delivery_phone: required(&self.delivery_phone, "Delivery phone")?,
            payment_method: self.payment_method,
            is_emergency: self.is_emergency,
            delivery_notes: optional(&self.delivery_notes),
        })
    }
}

/// Raw emergency delivery form input; medicine names one per line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmergencyForm {
    pub medicine_names: String,
    pub urgent_notes: String,
    pub delivery_address: String,
    pub delivery_phone: String,
}

impl EmergencyForm {
    pub fn validate(&self) -> Result<EmergencyDeliveryRequest, ValidationError> {
        let medicine_names = EmergencyDeliveryRequest::parse_medicine_names(&self.medicine_names);
        if medicine_names.is_empty() {
            return Err(ValidationError::NoMedicines);
        }
        Ok(EmergencyDeliveryRequest {
            medicine_names,
            urgent_notes: required(&self.urgent_notes, "Urgent notes")?,
            delivery_address: required(&self.delivery_address, "Delivery address")?,
            delivery_phone: required(&self.delivery_phone, "Emergency contact")?,
        })
    }
}

/// Raw prescription upload input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrescriptionUpload {
    pub doctor_name: String,
    pub hospital_name: String,
    /// `YYYY-MM-DD`, as produced by a date input.
    pub prescription_date: String,
    pub file: Option<FilePart>,
}

impl PrescriptionUpload {
    /// Check the input and build the multipart body the upload endpoint expects.
    pub fn validate(&self) -> Result<MultipartForm, ValidationError> {
        let doctor_name = required(&self.doctor_name, "Doctor name")?;
        let date = required(&self.prescription_date, "Prescription date")?;
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate)?;
        let file = self
            .file
            .clone()
            .ok_or(ValidationError::Required("Prescription file"))?;
        validate_prescription_file(&file.file_name, file.bytes.len())?;

        let mut form = MultipartForm::default().text("doctor_name", doctor_name);
        if let Some(hospital) = optional(&self.hospital_name) {
            form = form.text("hospital_name", hospital);
        }
        Ok(form
            .text("prescription_date", date.format("%Y-%m-%d").to_string())
            .file(FilePart {
                field: "file".into(),
                ..file
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegistrationForm {
        RegistrationForm {
            username: "asha".into(),
            email: "asha@example.com".into(),
            phone: "555-0101".into(),
            full_name: "Asha Rao".into(),
            password: "password123".into(),
            confirm_password: "password123".into(),
            age: "34".into(),
            medical_conditions: "  ".into(),
            allergies: "penicillin".into(),
        }
    }

    fn pdf(size: usize) -> FilePart {
        FilePart {
            field: String::new(),
            file_name: "scan.PDF".into(),
            mime: "application/pdf".into(),
            bytes: vec![0; size],
        }
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("abc").is_ok());
        assert_eq!(validate_username("   "), Err(ValidationError::Required("Username")));
        assert_eq!(
            validate_username("  ab  "),
            Err(ValidationError::UsernameTooShort)
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b").is_ok());
        assert_eq!(validate_email(""), Err(ValidationError::Required("Email")));
        assert_eq!(
            validate_email("userexample.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("pässwörd").is_ok());
        assert_eq!(
            validate_password("1234567"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_validate_confirm_password() {
        assert!(validate_confirm_password("password123", "password123").is_ok());
        assert_eq!(
            validate_confirm_password("", ""),
            Err(ValidationError::Required("Password confirmation"))
        );
        assert_eq!(
            validate_confirm_password("Password123", "password123"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
    }

    #[test]
    fn test_registration_builds_request() {
        let request = registration().validate().unwrap();
        assert_eq!(request.username, "asha");
        assert_eq!(request.age, Some(34));
        assert_eq!(request.medical_conditions, None);
        assert_eq!(request.allergies.as_deref(), Some("penicillin"));
    }

    #[test]
    fn test_registration_rejections() {
        let mut form = registration();
        form.confirm_password = "password124".into();
        assert_eq!(form.validate(), Err(ValidationError::PasswordsDoNotMatch));

        let mut form = registration();
        form.phone.clear();
        assert_eq!(form.validate(), Err(ValidationError::Required("Phone")));

        let mut form = registration();
        form.age = "thirty".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidAge));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Required("Delivery address").to_string(),
            "Delivery address is required"
        );
        let error: ClientError = ValidationError::FileTooLarge.into();
        assert_eq!(
            error,
            ClientError::Validation("Prescription file must be 10 MB or smaller".into())
        );
    }

    #[test]
    fn test_prescription_file_rules() {
        assert!(validate_prescription_file("rx.jpeg", 10).is_ok());
        assert!(validate_prescription_file("rx.PNG", 10).is_ok());
        assert_eq!(
            validate_prescription_file("rx.gif", 10),
            Err(ValidationError::UnsupportedFileType)
        );
        assert_eq!(
            validate_prescription_file("noextension", 10),
            Err(ValidationError::UnsupportedFileType)
        );
        assert!(validate_prescription_file("rx.pdf", MAX_PRESCRIPTION_BYTES).is_ok());
        assert_eq!(
            validate_prescription_file("rx.pdf", MAX_PRESCRIPTION_BYTES + 1),
            Err(ValidationError::FileTooLarge)
        );
    }

    #[test]
    fn test_prescription_upload_form() {
        let upload = PrescriptionUpload {
            doctor_name: " Dr. Mehta ".into(),
            hospital_name: String::new(),
            prescription_date: "2025-01-05".into(),
            file: Some(pdf(16)),
        };
        let form = upload.validate().unwrap();
        assert_eq!(
            form.fields,
            vec![
                ("doctor_name".to_string(), "Dr. Mehta".to_string()),
                ("prescription_date".to_string(), "2025-01-05".to_string()),
            ]
        );
        assert_eq!(form.files[0].field, "file");
        assert_eq!(form.files[0].file_name, "scan.PDF");

        let missing_file = PrescriptionUpload {
            file: None,
            ..upload.clone()
        };
        assert_eq!(
            missing_file.validate(),
            Err(ValidationError::Required("Prescription file"))
        );

        let bad_date = PrescriptionUpload {
            prescription_date: "05/01/2025".into(),
            ..upload
        };
        assert_eq!(bad_date.validate(), Err(ValidationError::InvalidDate));
    }

    #[test]
    fn test_checkout_form() {
        let form = CheckoutForm {
            delivery_address: "12 Market Street".into(),
            delivery_phone: "555-0101".into(),
            payment_method: PaymentMethod::Card,
            is_emergency: true,
            delivery_notes: String::new(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.payment_method, PaymentMethod::Card);
        assert!(request.is_emergency);
        assert_eq!(request.delivery_notes, None);

        let empty = CheckoutForm::default();
        assert_eq!(
            empty.validate(),
            Err(ValidationError::Required("Delivery address"))
        );
    }

    #[test]
    fn test_emergency_form() {
        let form = EmergencyForm {
            medicine_names: "Insulin\n\n Aspirin ".into(),
            urgent_notes: "Diabetic emergency".into(),
            delivery_address: "12 Market Street".into(),
            delivery_phone: "555-0101".into(),
        };
        assert_eq!(
            form.validate().unwrap().medicine_names,
            vec!["Insulin", "Aspirin"]
        );

        let blank = EmergencyForm {
            medicine_names: " \n ".into(),
            ..form
        };
        assert_eq!(blank.validate(), Err(ValidationError::NoMedicines));
    }

    #[test]
    fn test_profile_form_round_trip() {
        let update = ProfileUpdate {
            full_name: Some("Asha Rao".into()),
            phone: Some("555-0101".into()),
            age: Some(34),
            city: Some("Pune".into()),
            ..ProfileUpdate::default()
        };
        let form = ProfileForm::from_update(&update);
        assert_eq!(form.age, "34");
        assert_eq!(form.validate().unwrap(), update);
    }
}
