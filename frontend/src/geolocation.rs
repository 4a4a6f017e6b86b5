use std::{cell::RefCell, rc::Rc};

use gloo_console::error;
use gloo_utils::window;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Position, PositionError};
use workout_tracker_lib::{
    view::{Geolocation, PositionCallback},
    Coordinates, LocationError,
};

/// `navigator.geolocation`, reporting exactly once per request.
pub struct BrowserGeolocation;

impl Geolocation for BrowserGeolocation {
    fn request_current_position(&self, on_result: PositionCallback) {
        let geolocation = match window().navigator().geolocation() {
            Ok(geolocation) => geolocation,
            Err(_) => {
                on_result(Err(LocationError::Unsupported));
                return;
            }
        };

        let on_result = Rc::new(RefCell::new(Some(on_result)));

        let success = {
            let on_result = on_result.clone();
            Closure::once_into_js(move |position: Position| {
                let coords = position.coords();
                report(&on_result, Ok(Coordinates::new(coords.latitude(), coords.longitude())));
            })
        };

        let failure = {
            let on_result = on_result.clone();
            Closure::once_into_js(move |err: PositionError| {
                report(&on_result, Err(LocationError::from_code(err.code())));
            })
        };

        if geolocation
            .get_current_position_with_error_callback(
                success.unchecked_ref(),
                Some(failure.unchecked_ref()),
            )
            .is_err()
        {
            error!("getCurrentPosition failed");
            report(&on_result, Err(LocationError::Unsupported));
        }
    }
}

fn report(
    on_result: &Rc<RefCell<Option<PositionCallback>>>,
    result: Result<Coordinates, LocationError>,
) {
    let callback = on_result.borrow_mut().take();
    if let Some(callback) = callback {
        callback(result);
    }
}
