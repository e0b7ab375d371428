use serde::Serialize;

/// A registered customer.
///
/// # Actor Framework
/// Managed by the customer actor; see [`crate::customer_actor`] for the
/// [`ActorEntity`](actor_framework::ActorEntity) implementation.
///
/// `orders` holds the ids of every order placed by this customer, oldest first.
/// It is only appended to by the order workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub address: String,
    pub mobile: String,
    /// Base64 (standard alphabet, padded) encoding of the uploaded image.
    pub profile_pic: String,
    pub orders: Vec<String>,
}

/// Payload for registering a customer. The picture is already base64-encoded.
#[derive(Clone, PartialEq)]
pub struct CustomerCreate {
    pub name: String,
    pub address: String,
    pub mobile: String,
    pub profile_pic: String,
}

/// Replaces every editable field of a customer.
#[derive(Clone, PartialEq)]
pub struct CustomerUpdate {
    pub name: String,
    pub address: String,
    pub mobile: String,
    pub profile_pic: String,
}

// Pictures can be megabytes of base64; debug logs only show their size.
macro_rules! debug_without_picture {
    ($ty:ident) => {
        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($ty))
                    .field("name", &self.name)
                    .field("address", &self.address)
                    .field("mobile", &self.mobile)
                    .field("profile_pic_len", &self.profile_pic.len())
                    .finish()
            }
        }
    };
}

debug_without_picture!(CustomerCreate);
debug_without_picture!(CustomerUpdate);

impl Customer {
    /// Creates a customer with no orders.
    pub fn new(id: impl Into<String>, params: CustomerCreate) -> Self {
        Self {
            id: id.into(),
            name: params.name,
            address: params.address,
            mobile: params.mobile,
            profile_pic: params.profile_pic,
            orders: Vec::new(),
        }
    }
}
