//! Enumerations for the demo form.

/// Fields of the demo form.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    Username,
    Password,
    Age,
    Subscribe,
    Code,
}

impl FormField {
    /// Tab order.
    pub const ALL: [FormField; 5] = [
        FormField::Username,
        FormField::Password,
        FormField::Age,
        FormField::Subscribe,
        FormField::Code,
    ];

    /// Widget name, used as the sender of its messages.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Username => "username",
            FormField::Password => "password",
            FormField::Age => "age",
            FormField::Subscribe => "subscribe",
            FormField::Code => "code",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormField::Username => "Username",
            FormField::Password => "Password",
            FormField::Age => "Age",
            FormField::Subscribe => "Subscribe",
            FormField::Code => "Code",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}
