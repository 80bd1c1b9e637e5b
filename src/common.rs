// Toast notification enum
#[derive(Clone, Debug, PartialEq)]
pub enum Toaster {
    Success(String),
    Error(String),
    Warning(String),
    Info(String),
}

impl Toaster {
    pub fn message(&self) -> &str {
        match self {
            Toaster::Success(msg)
            | Toaster::Error(msg)
            | Toaster::Warning(msg)
            | Toaster::Info(msg) => msg,
        }
    }

    /// Card classes for rendering the notice inline.
    pub fn classes(&self) -> &'static str {
        match self {
            Toaster::Success(_) => "bg-green-900 border-green-700 text-green-300",
            Toaster::Error(_) => "bg-red-900 border-red-700 text-red-300",
            Toaster::Warning(_) => "bg-amber-900 border-amber-700 text-amber-300",
            Toaster::Info(_) => "bg-blue-900 border-blue-700 text-blue-300",
        }
    }
}
