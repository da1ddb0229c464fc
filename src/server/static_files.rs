//! Embedded assets for the web form. Kept inline so the binary stays
//! self-contained.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>numwatch</title>
<link rel="stylesheet" href="/style.css">
</head>
<body>
<header><h1>&#128241; numwatch</h1></header>
<main>
  <form id="lookup-form">
    <label for="number">Phone number (with country code)</label>
    <input id="number" name="number" type="text" placeholder="+919876543210" autocomplete="off">
    <button type="submit">&#128269; Look up</button>
  </form>
  <p id="error" class="error" hidden></p>
  <section id="results" hidden>
    <h2>&#128202; Result</h2>
    <dl>
      <dt>Number</dt><dd id="r-number">-</dd>
      <dt>Country</dt><dd id="r-region">-</dd>
      <dt>Carrier</dt><dd id="r-carrier">-</dd>
      <dt>Time zone</dt><dd id="r-tz">-</dd>
      <dt>Currency</dt><dd id="r-currency">-</dd>
      <dt>Latitude</dt><dd id="r-lat">-</dd>
      <dt>Longitude</dt><dd id="r-lon">-</dd>
    </dl>
    <a id="map-link" href="/map" target="_blank" hidden>&#128506;&#65039; Show on map</a>
  </section>
</main>
<script src="/app.js"></script>
</body>
</html>
"#;

pub const STYLE_CSS: &str = r#"body {
  font-family: system-ui, sans-serif;
  background: #f0f0f0;
  color: #2c3e50;
  max-width: 600px;
  margin: 0 auto;
  padding: 1rem;
}
header h1 { text-align: center; }
form { display: flex; flex-direction: column; gap: 0.5rem; }
input { font-size: 1.1rem; padding: 0.5rem; text-align: center; }
button {
  background: #3498db;
  color: white;
  font-weight: bold;
  border: none;
  padding: 0.6rem;
  cursor: pointer;
}
section {
  background: white;
  border: 1px solid #ccc;
  margin-top: 1rem;
  padding: 1rem;
}
dl { display: grid; grid-template-columns: 10rem 1fr; row-gap: 0.3rem; }
dt { font-weight: bold; }
.error { color: #c0392b; font-weight: bold; }
a#map-link {
  display: inline-block;
  margin-top: 0.8rem;
  background: #27ae60;
  color: white;
  padding: 0.5rem 1rem;
  text-decoration: none;
}
"#;

pub const APP_JS: &str = r#"const form = document.getElementById('lookup-form');
const errorEl = document.getElementById('error');
const results = document.getElementById('results');
const mapLink = document.getElementById('map-link');

function set(id, value) {
  document.getElementById(id).textContent = value;
}

form.addEventListener('submit', async (e) => {
  e.preventDefault();
  errorEl.hidden = true;
  const number = document.getElementById('number').value;
  const resp = await fetch('/api/lookup?number=' + encodeURIComponent(number));
  const body = await resp.json();
  if (!resp.ok) {
    results.hidden = true;
    errorEl.textContent = body.error;
    errorEl.hidden = false;
    return;
  }
  set('r-number', body.number);
  set('r-region', body.region);
  set('r-carrier', body.carrier);
  set('r-tz', body.tz_label ? body.time_zone + ' (' + body.tz_label + ')' : body.time_zone);
  set('r-currency', body.currency_name + ' (' + body.currency_symbol + ')');
  set('r-lat', body.map_available ? body.latitude.toFixed(4) : 'Not available');
  set('r-lon', body.map_available ? body.longitude.toFixed(4) : 'Not available');
  mapLink.hidden = !body.map_available;
  results.hidden = false;
});
"#;
