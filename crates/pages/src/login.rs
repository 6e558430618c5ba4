//! The herokuapp login page

use uiprobe_screenplay::{Click, Enter, Navigate, Target, Task, Text, WaitFor};

use crate::site::Site;

pub struct LoginPage;

impl LoginPage {
    fn username_field() -> Target {
        Target::css("username field", "#username")
    }

    fn password_field() -> Target {
        Target::css("password field", "#password")
    }

    fn login_button() -> Target {
        Target::css("login button", r#"button[type="submit"]"#)
    }

    fn flash() -> Target {
        Target::css("flash message", "#flash")
    }

    pub fn open(site: &Site) -> Navigate {
        Navigate::to(site.login_url())
    }

    /// Fill both credential fields, submit, and wait until the flash
    /// message is there to read. Valid and invalid credentials go through
    /// the same task; the site decides which message comes back.
    pub fn login_with_credentials(username: &str, password: &str) -> Task {
        Task::where_(
            format!("log in as {username}"),
            vec![
                Box::new(Enter::the_value(username).into_the(Self::username_field())),
                Box::new(Enter::the_value(password).into_the(Self::password_field())),
                Box::new(Click::on(Self::login_button())),
                Box::new(WaitFor::the(Self::flash())),
            ],
        )
    }

    /// The raw flash text; callers normalise it for their path.
    pub fn flash_message() -> Text {
        Text::of(Self::flash())
    }
}
