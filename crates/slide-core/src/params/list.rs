//! Lista declarada de nombres de parámetros del componente.
//!
//! Los nombres con el marcador `'_'` inicial son variantes internas de un
//! nombre público; ambas formas normalizan al mismo nombre al derivar el
//! schema. La lista se mantiene a mano junto con los defaults.

use indexmap::IndexSet;
use once_cell::sync::Lazy;

use super::normalize_key;

/// Nombres declarados, en orden estable. El orden se conserva en el set
/// derivado; la pertenencia es case-sensitive y por igualdad exacta.
pub const PARAMS_LIST: &[&str] = &[
    "init",
    "_direction",
    "touchEventsTarget",
    "initialSlide",
    "_speed",
    "cssMode",
    "updateOnWindowResize",
    "nested",
    "_enabled",
    "_width",
    "_height",
    "preventInteractionOnTransition",
    "_autoHeight",
    "setWrapperSize",
    "_effect",
    "breakpoints",
    "_spaceBetween",
    "_slidesPerView",
    "_slidesPerGroup",
    "_centeredSlides",
    "_slidesOffsetBefore",
    "_slidesOffsetAfter",
    "normalizeSlideIndex",
    "_watchOverflow",
    "roundLengths",
    "touchRatio",
    "simulateTouch",
    "_shortSwipes",
    "_longSwipes",
    "longSwipesRatio",
    "longSwipesMs",
    "_followFinger",
    "allowTouchMove",
    "_threshold",
    "touchReleaseOnEdges",
    "_resistance",
    "_resistanceRatio",
    "_watchSlidesProgress",
    "_grabCursor",
    "preventClicks",
    "preventClicksPropagation",
    "_slideToClickedSlide",
    "_loop",
    "loopedSlides",
    "_allowSlidePrev",
    "_allowSlideNext",
    "_noSwiping",
    "noSwipingClass",
    "passiveListeners",
    "containerModifierClass",
    "slideClass",
    "slideActiveClass",
    "slideVisibleClass",
    "slideNextClass",
    "slidePrevClass",
    "wrapperClass",
    "runCallbacksOnInit",
    "observer",
    "observeParents",
    // módulos opcionales
    "_navigation",
    "_pagination",
    "_scrollbar",
    "_autoplay",
    "_lazy",
    "_zoom",
    "_thumbs",
    "a11y",
    "_keyboard",
    "_mousewheel",
    "virtual",
    "controller",
    "on",
];

/// Schema derivado: nombres públicos (sin marcador), una sola vez.
pub fn allowed_params() -> &'static IndexSet<String> {
    static ALLOWED: Lazy<IndexSet<String>> = Lazy::new(|| {
        PARAMS_LIST
            .iter()
            .map(|key| normalize_key(key).to_string())
            .collect()
    });
    &ALLOWED
}
