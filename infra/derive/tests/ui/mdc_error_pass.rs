use mdc_derive::mdc_error;
use std::borrow::Cow;

#[mdc_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err::<(), _>(std::io::Error::other("boom")).context("reading policy")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (reading policy): boom");

    let err: DemoError = "unexpected".into();
    assert!(matches!(err, DemoError::Internal { .. }));

    let err = Err::<(), _>(DemoError::NotFound { message: "2.184".into(), context: None })
        .context("dimension")
        .unwrap_err();
    assert_eq!(err.to_string(), "Not found (dimension): 2.184");
}
