#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod logout_tests;

#[cfg(test)]
mod concurrent_login_tests;

#[cfg(test)]
mod guard_tests;

#[cfg(test)]
mod notice_tests;

#[cfg(test)]
mod settings_tests;
