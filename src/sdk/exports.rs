//! Names and signatures of the functions the host module exports.
//!
//! A name match with a mismatched signature is undefined behavior; these
//! aliases are the single place the signatures are written down.

use super::{CallbackFunction, Parameter, RenderInfo, StateType};
use std::ffi::{CStr, c_char};

/// SDK version query. Also the marker used to recognize the host module.
pub const GET_SDK_VERSION: &CStr = c"ENBGetSDKVersion";
/// Product version query.
pub const GET_VERSION: &CStr = c"ENBGetVersion";
/// Game identifier query.
pub const GET_GAME_IDENTIFIER: &CStr = c"ENBGetGameIdentifier";
/// Callback registration.
pub const SET_CALLBACK_FUNCTION: &CStr = c"ENBSetCallbackFunction";
/// Parameter read.
pub const GET_PARAMETER: &CStr = c"ENBGetParameter";
/// Parameter write.
pub const SET_PARAMETER: &CStr = c"ENBSetParameter";
/// Render info accessor (SDK 1001).
pub const GET_RENDER_INFO: &CStr = c"ENBGetRenderInfo";
/// State query (SDK 1001).
pub const GET_STATE: &CStr = c"ENBGetState";

pub(crate) type GetLongFn = unsafe extern "system" fn() -> i32;
pub(crate) type SetCallbackFunctionFn = unsafe extern "system" fn(CallbackFunction);
pub(crate) type GetParameterFn = unsafe extern "system" fn(
    *const c_char,
    *const c_char,
    *const c_char,
    *mut Parameter,
) -> i32;
pub(crate) type SetParameterFn = unsafe extern "system" fn(
    *const c_char,
    *const c_char,
    *const c_char,
    *const Parameter,
) -> i32;
pub(crate) type GetRenderInfoFn = unsafe extern "system" fn() -> *mut RenderInfo;
pub(crate) type GetStateFn = unsafe extern "system" fn(StateType) -> i32;
