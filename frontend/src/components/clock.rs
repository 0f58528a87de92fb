/// Wall clock in milliseconds, as the state machines expect it.
pub fn now_ms() -> u64 {
    web_sys::js_sys::Date::now().max(0.0) as u64
}
