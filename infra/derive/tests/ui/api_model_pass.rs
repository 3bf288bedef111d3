use portal_derive::api_model;

#[api_model]
pub struct SignUp {
    pub user_name: String,
    pub confirm_password: String,
}

#[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
#[derive(Clone)]
pub struct Reply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<Vec<String>>,
}

fn main() {}
