//! `/customers` handlers. Writes take `multipart/form-data`.

use super::{ApiError, StatusBody};
use crate::lifecycle::PosClients;
use crate::model::{Customer, CustomerCreate, CustomerUpdate};
use crate::validation::{self, errmsg};
use actor_framework::ActorClient;
use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::info;

/// Part names of a customer form. Updates prefix every part with `update`.
struct FormFields {
    name: &'static str,
    address: &'static str,
    mobile: &'static str,
    profile_pic: &'static str,
}

const CREATE_FIELDS: FormFields = FormFields {
    name: "name",
    address: "address",
    mobile: "mobile",
    profile_pic: "profilePic",
};

const UPDATE_FIELDS: FormFields = FormFields {
    name: "updateName",
    address: "updateAddress",
    mobile: "updateMobile",
    profile_pic: "updateProfilePic",
};

/// A checked customer form with the picture base64-encoded.
#[derive(Debug, PartialEq)]
struct CustomerForm {
    name: String,
    address: String,
    mobile: String,
    profile_pic: String,
}

#[derive(Default)]
struct RawForm {
    name: Option<String>,
    address: Option<String>,
    mobile: Option<String>,
    profile_pic: Option<Bytes>,
}

async fn read_form(mut multipart: Multipart, fields: &FormFields) -> Result<RawForm, ApiError> {
    let mut form = RawForm::default();
    while let Some(field) = multipart.next_field().await? {
        let Some(part) = field.name().map(str::to_owned) else {
            continue;
        };
        if part == fields.name {
            form.name = Some(field.text().await?);
        } else if part == fields.address {
            form.address = Some(field.text().await?);
        } else if part == fields.mobile {
            form.mobile = Some(field.text().await?);
        } else if part == fields.profile_pic {
            form.profile_pic = Some(field.bytes().await?);
        }
    }
    Ok(form)
}

/// Rules run in a fixed order: name, mobile, address, picture. The first failure is reported.
fn check_form(raw: RawForm) -> Result<CustomerForm, ApiError> {
    let name = raw.name.ok_or(errmsg::NAME_REQUIRED)?;
    validation::validate_name(&name)?;

    let mobile = raw.mobile.ok_or(errmsg::MOBILE_REQUIRED)?;
    validation::validate_mobile(&mobile)?;

    let address = raw.address.unwrap_or_default();
    validation::validate_address(&address)?;

    let picture = raw
        .profile_pic
        .filter(|bytes| !bytes.is_empty())
        .ok_or(errmsg::PROFILE_PIC_REQUIRED)?;

    Ok(CustomerForm {
        name,
        address,
        mobile,
        profile_pic: STANDARD.encode(&picture),
    })
}

pub async fn create_customer(
    State(clients): State<PosClients>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<StatusBody>), ApiError> {
    let form = check_form(read_form(multipart?, &CREATE_FIELDS).await?)?;
    info!(name = %form.name, "Request to save customer");

    let id = clients
        .customers
        .create_customer(CustomerCreate {
            name: form.name,
            address: form.address,
            mobile: form.mobile,
            profile_pic: form.profile_pic,
        })
        .await?;

    info!(customer_id = %id, "Customer saved");
    let mut body = StatusBody::success("Customer saved successfully");
    body.id = Some(id);
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn update_customer(
    State(clients): State<PosClients>,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<StatusCode, ApiError> {
    let form = check_form(read_form(multipart?, &UPDATE_FIELDS).await?)?;

    clients
        .customers
        .update_customer(
            id.clone(),
            CustomerUpdate {
                name: form.name,
                address: form.address,
                mobile: form.mobile,
                profile_pic: form.profile_pic,
            },
        )
        .await?;

    info!(customer_id = %id, "Customer updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_customer(
    State(clients): State<PosClients>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    clients.customers.delete(id.clone()).await?;
    info!(customer_id = %id, "Customer deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_customer(
    State(clients): State<PosClients>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(clients.customers.get_customer(id).await?))
}

pub async fn list_customers(
    State(clients): State<PosClients>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(clients.customers.list().await?))
}
