use std::{
    result
};

use convolution::my_app;
use convolution::my_err::MyError;

fn main() -> result::Result<(), MyError> {
    env_logger::init();

    my_app::create_app()?;

    Ok(())
}
