use gloo_console::error;
use leaflet::{LatLng, Map, MapOptions, Marker, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    js_sys::{Function, Object, Reflect},
    HtmlElement,
};
use workout_tracker_lib::{coords::Coords, map::MapWidget, render::PopupSpec};
use yew::Callback;

/// Leaflet map mounted into the `#map` element once the position is known.
pub struct LeafletMap {
    map: Map,
    _on_click: Closure<dyn Fn(JsValue)>,
}

impl LeafletMap {
    pub fn new(container: &HtmlElement, on_click: Callback<Coords>) -> Self {
        let map = Map::new_with_element(container, &MapOptions::default());

        let on_click = Closure::<dyn Fn(JsValue)>::new(move |event: JsValue| {
            let event: MouseEvent = event.unchecked_into();
            let lat_lng = event.lat_lng();
            on_click.emit(Coords::new(lat_lng.lat(), lat_lng.lng()));
        });
        map.on("click", on_click.as_ref());

        Self {
            map,
            _on_click: on_click,
        }
    }
}

impl MapWidget for LeafletMap {
    fn set_view(&self, center: Coords, zoom: f64) {
        self.map.set_view(&lat_lng(center), zoom);
    }

    fn add_tile_layer(&self, url: &str, attribution: &str) {
        let opts = TileLayerOptions::new();
        opts.set_attribution(attribution.to_string());
        TileLayer::new_options(url, &opts).add_to(&self.map);
    }

    fn add_marker(&self, position: Coords, popup: &PopupSpec) {
        let opts = PopupOptions::default();
        opts.set_max_width(popup.max_width);
        opts.set_min_width(popup.min_width);
        opts.set_auto_close(popup.auto_close);
        opts.set_close_on_click(popup.close_on_click);
        opts.set_class_name(popup.class_name.clone());

        let leaflet_popup = Popup::new(&opts, None);
        leaflet_popup.set_content(&popup.content.as_str().into());

        let marker = Marker::new(&lat_lng(position));
        marker.add_to(&self.map);
        marker.bind_popup(&leaflet_popup);
        marker.open_popup();
    }

    fn pan_to(&self, center: Coords, zoom: f64, duration_secs: f64) {
        if let Err(e) = set_view_animated(&self.map, center, zoom, duration_secs) {
            error!(format!("Could not move map: {:?}", e));
            self.map.set_view(&lat_lng(center), zoom);
        }
    }
}

fn lat_lng(coords: Coords) -> LatLng {
    LatLng::new(coords.latitude(), coords.longitude())
}

/// `map.setView(center, zoom, { animate: true, pan: { duration } })`
fn set_view_animated(map: &Map, center: Coords, zoom: f64, duration_secs: f64) -> Result<(), JsValue> {
    let pan = Object::new();
    Reflect::set(&pan, &"duration".into(), &duration_secs.into())?;

    let options = Object::new();
    Reflect::set(&options, &"animate".into(), &JsValue::TRUE)?;
    Reflect::set(&options, &"pan".into(), &pan)?;

    let map: &JsValue = map.as_ref();
    let set_view: Function = Reflect::get(map, &"setView".into())?.dyn_into()?;
    set_view.call3(map, &lat_lng(center).into(), &zoom.into(), &options)?;
    Ok(())
}
