pub(super) const INDEX_HTML: &str = r#"<!DOCTYPE html>
  <html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
    <title>Quakemap</title>
    <link
      rel="stylesheet"
      href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"
      integrity="sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY="
      crossorigin=""
    />
    <style>
      html, body { height: 100%; margin: 0; padding: 0; }
      #map { height: 100%; width: 100%; }
      .info {
        padding: 6px 8px;
        font: 14px/16px Arial, Helvetica, sans-serif;
        background: white;
        background: rgba(255,255,255,0.8);
        box-shadow: 0 0 15px rgba(0,0,0,0.2);
        border-radius: 5px;
      }
      .legend { line-height: 18px; color: #555; }
      .legend i {
        width: 18px;
        height: 18px;
        float: left;
        margin-right: 8px;
        opacity: 0.7;
      }
    .leaflet-control-zoom .leaflet-control-zoom-to-extent {
      display: block;
      background-color: #fff;
      border-bottom: 1px solid #ccc;
      width: 26px;
      height: 26px;
      line-height: 26px;
      text-align: center;
      text-decoration: none;
      color: #333;
      font: bold 18px 'Lucida Console', Monaco, monospace;
      text-indent: 1px;
    }

    .leaflet-control-zoom .leaflet-control-zoom-to-extent:hover {
      background-color: #f4f4f4;
    }
  </style>
  </head>
  <body>
    <div id="map"></div>

    <script
      src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"
      integrity="sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo="
      crossorigin=""
    ></script>

    <script>
      // Circles come pre-styled from the server: every Leaflet option is a property
      function markerLayer(data) {
        return L.geoJSON(data, {
          pointToLayer: (feature, latlng) => L.circle(latlng, feature.properties),
          onEachFeature: (feature, layer) => layer.bindPopup(feature.properties.popup),
        });
      }

      async function fetchJson(url) {
        const res = await fetch(url);
        if (!res.ok) {
          throw new Error(`${url}: ${res.status}`);
        }
        return res.json();
      }

      function zoomToExtent(map, extent) {
        if (extent) {
          map.fitBounds([
            [extent.miny, extent.minx],
            [extent.maxy, extent.maxx],
          ]);
        }
      }

      async function initMap() {
        const view = await fetchJson('/map/view');
        const initial = [];

        // base maps, exactly one shown at a time
        const baseMaps = {};
        view.baseLayers.forEach(base => {
          const layer = L.tileLayer(base.urlTemplate, base.options);
          baseMaps[base.name] = layer;
          if (base.visible) initial.push(layer);
        });

        // overlays; deferred ones start empty and are filled once loaded
        const overlayMaps = {};
        const deferred = [];
        for (const overlay of view.overlays) {
          let layer;
          if (overlay.deferred) {
            layer = L.layerGroup();
            deferred.push([overlay, layer]);
          } else {
            layer = markerLayer(await fetchJson(overlay.source));
          }
          overlayMaps[overlay.name] = layer;
          if (overlay.visible) initial.push(layer);
        }

        const map = L.map('map', {
          center: view.center,
          zoom: view.zoom,
          layers: initial,
        });

        deferred.forEach(([overlay, group]) => {
          fetchJson(overlay.source)
            .then(data => L.geoJSON(data, { style: data.style }).addTo(group))
            .catch(console.error);
        });

        L.control.layers(baseMaps, overlayMaps, {
          collapsed: view.layerControl.collapsed,
        }).addTo(map);

        const legend = L.control({ position: view.legend.position });
        legend.onAdd = function () {
          const div = L.DomUtil.create('div', 'info legend');
          div.innerHTML = view.legend.html;
          return div;
        };
        legend.addTo(map);

        // Add extent button to the zoom control
        const zoomToExtentButton = L.DomUtil.create(
          'a',
          'leaflet-control-zoom-to-extent',
          map.zoomControl._container
        );
        zoomToExtentButton.innerHTML = '⤢';
        zoomToExtentButton.href = '#';
        zoomToExtentButton.title = 'Zoom to Earthquakes';

        L.DomEvent.on(zoomToExtentButton, 'click', e => {
          L.DomEvent.preventDefault(e);
          zoomToExtent(map, view.extent);
        });
      }

      initMap().catch(console.error);
    </script>
  </body>
  </html>
"#;
