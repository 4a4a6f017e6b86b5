use std::collections::HashMap;

use gloo_console::info;
use gloo_utils::document;
use leaflet::{
    LatLng, Map, MapOptions, Marker, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions,
};
use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue, UnwrapThrowExt};
use web_sys::{js_sys::{Object, Reflect}, HtmlElement, Node};
use workout_tracker_lib::{
    view::{MapView, MarkerSpec, PanOptions},
    Coordinates, TrackerConfig, WorkoutId,
};
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `L.Map` seen through the `setView` overload that takes pan options.
    type PanningMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view_with_options(this: &PanningMap, center: &LatLng, zoom: f64, options: &JsValue);
}

/// Leaflet map living in a detached container that is mounted into the
/// component tree with `render`.
pub struct LeafletMap {
    map: Map,
    container: HtmlElement,
    tile_url: String,
    tile_attribution: String,
    markers: HashMap<WorkoutId, Marker>,
}

impl LeafletMap {
    pub fn new(config: &TrackerConfig, on_click: Callback<Coordinates>) -> Self {
        let container: HtmlElement = document()
            .create_element("div")
            .unwrap_throw()
            .dyn_into()
            .unwrap_throw();
        container.set_class_name("map");

        let map = Map::new_with_element(&container, &MapOptions::default());
        map.on_mouse_click(Box::new(move |event: MouseEvent| {
            let lat_lng = event.lat_lng();
            on_click.emit(Coordinates::new(lat_lng.lat(), lat_lng.lng()));
        }));

        Self {
            map,
            container,
            tile_url: config.tile_url.clone(),
            tile_attribution: config.tile_attribution.clone(),
            markers: HashMap::new(),
        }
    }

    pub fn render(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }

    fn add_tile_layer(&self) {
        let opts = TileLayerOptions::new();
        opts.set_update_when_idle(true);
        let _ = Reflect::set(&opts, &"attribution".into(), &self.tile_attribution.as_str().into());
        TileLayer::new_options(&self.tile_url, &opts).add_to(&self.map);
    }
}

impl MapView for LeafletMap {
    fn initialize(&mut self, center: Coordinates, zoom: f64) {
        self.map.invalidate_size(false);
        self.map.set_view(&LatLng::new(center.lat, center.lng), zoom);
        self.add_tile_layer();
    }

    fn add_marker(&mut self, spec: &MarkerSpec) {
        if self.markers.contains_key(&spec.id) {
            return;
        }

        info!(format!("Adding marker for workout {} at {}", spec.id, spec.coordinates));

        let popup_opts = PopupOptions::default();
        popup_opts.set_max_width(spec.popup_max_width);
        popup_opts.set_min_width(spec.popup_min_width);
        popup_opts.set_auto_close(false);
        popup_opts.set_close_on_click(false);
        popup_opts.set_class_name(spec.class_name.clone());

        let popup = Popup::new(&popup_opts, None);
        popup.set_content(&spec.popup_content.as_str().into());

        let marker = Marker::new(&LatLng::new(spec.coordinates.lat, spec.coordinates.lng));
        marker.add_to(&self.map);
        marker.bind_popup(&popup).open_popup();

        self.markers.insert(spec.id, marker);
    }

    fn set_view(&mut self, center: Coordinates, zoom: f64, options: PanOptions) {
        let pan = Object::new();
        let _ = Reflect::set(&pan, &"duration".into(), &options.duration_secs.into());
        let opts = Object::new();
        let _ = Reflect::set(&opts, &"animate".into(), &options.animate.into());
        let _ = Reflect::set(&opts, &"pan".into(), &pan);

        self.map
            .unchecked_ref::<PanningMap>()
            .set_view_with_options(&LatLng::new(center.lat, center.lng), zoom, &opts);
    }
}
