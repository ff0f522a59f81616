//! Defaults del componente y de sus módulos opcionales.
//!
//! Dos fuentes: `base_defaults` es la configuración de fábrica del
//! componente; `extended_defaults` la aportan los módulos opcionales
//! (paginación, navegación, scrollbar) y sobreescribe a la base en caso de
//! colisión.

use serde_json::{json, Value};

/// Defaults base del componente.
pub fn base_defaults() -> Value {
    json!({
        "init": true,
        "enabled": true,
        "direction": "horizontal",
        "touchEventsTarget": "wrapper",
        "initialSlide": 0,
        "speed": 300,
        "cssMode": false,
        "updateOnWindowResize": true,
        "slidesPerView": 1,
        "slidesPerGroup": 1,
        "spaceBetween": 0,
        "centeredSlides": false,
        "autoHeight": false,
        "loop": false,
        "allowTouchMove": true,
        "simulateTouch": true,
        "touchRatio": 1,
        "threshold": 5,
        "grabCursor": false,
        "watchOverflow": true,
        "resistance": true,
        "resistanceRatio": 0.85,
        "preventClicks": true,
        "preventClicksPropagation": true,
        "allowSlidePrev": true,
        "allowSlideNext": true,
        "runCallbacksOnInit": true,
        "containerModifierClass": "slide-",
        "slideClass": "slide-item",
        "slideActiveClass": "slide-item-active",
        "slideVisibleClass": "slide-item-visible",
        "wrapperClass": "slide-wrapper",
    })
}

/// Defaults del punto de extensión (módulos opcionales instalados).
pub fn extended_defaults() -> Value {
    json!({
        "navigation": {
            "hideOnClick": false,
            "disabledClass": "slide-button-disabled",
            "hiddenClass": "slide-button-hidden",
        },
        "pagination": {
            "clickable": false,
            "hideOnClick": false,
            "bulletClass": "slide-pagination-bullet",
        },
        "scrollbar": {
            "draggable": false,
            "snapOnRelease": true,
        },
    })
}
