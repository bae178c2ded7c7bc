use crate::domain::{Booth, BoothColor, CollectionStats, PrefixScheme};
use crate::templates::page_layout;
use maud::{html, Markup, PreEscaped};

pub struct MapVm {
    pub property_name: String,
    pub plane_width: u32,
    pub plane_height: u32,
    pub booths: Vec<Booth>,
    pub stats: CollectionStats,
    pub scheme: PrefixScheme,
}

const MAP_CSS: &str = r#"
body {
  font-family: sans-serif;
  margin: 0;
  padding: 0;
}
h1 {
  text-align: center;
  margin: 20px 0 10px;
}
.pageContent {
  padding-bottom: 90px;
  margin: 0 20px;
}
.legend {
  position: fixed;
  bottom: 0;
  left: 0;
  width: 100%;
  background: #fff;
  border-top: 2px solid #333;
  padding: 8px;
  z-index: 999;
  display: flex;
  justify-content: space-evenly;
  flex-wrap: wrap;
}
.legend-item {
  display: flex;
  align-items: center;
  margin: 4px 8px;
  cursor: pointer;
}
.color-box {
  width: 20px;
  height: 20px;
  margin-right: 6px;
  border: 2px solid #333;
}
#mapWrapper {
  margin: 0 auto;
  overflow: hidden;
}
#mapContainer {
  position: relative;
  background: #fff;
}
.booth {
  position: absolute;
  box-sizing: border-box;
  border: 2px solid #111;
  display: flex;
  justify-content: center;
  align-items: center;
  font-weight: bold;
  font-size: 12px;
  color: #000;
  cursor: pointer;
}
.legend-info {
  cursor: default;
  display: flex;
  flex-direction: row;
  align-items: center;
  gap: 10px;
  font-weight: bold;
}
.map-controls {
  display: flex;
  justify-content: center;
  gap: 10px;
  margin-bottom: 10px;
}
.map-controls a {
  text-decoration: none;
}
.map-controls button {
  background: #007bff;
  color: #fff;
  border: none;
  padding: 8px 16px;
  border-radius: 4px;
  cursor: pointer;
  font-size: 14px;
}
"#;

// Booth placement, scale-to-fit, and the 90-degree rotation toggle. The
// occupant popups read the fields serialized by `Booth`/`OccupantEntry`.
const MAP_JS: &str = r##"
function initMap() {
  const ctn = document.getElementById("mapContainer");

  ctn.style.width  = planeWidth + "px";
  ctn.style.height = planeHeight + "px";

  boothData.forEach(b => {
    const div = document.createElement("div");
    div.className = "booth";
    div.style.left   = b.x + "px";
    div.style.top    = b.y + "px";
    div.style.width  = b.width + "px";
    div.style.height = b.height + "px";
    div.textContent = b.label;
    div.style.backgroundColor = b.color || "#bdbdbd";

    let occList = b.occupants || [];
    if (occList.length > 0) {
      let info = occList.map(o => {
        return (
          "LeaseID: " + o.lease_id + "\n" +
          "Occupant: " + o.occupant_name + "\n" +
          "End: " + o.lease_end + "\n" +
          "Balance: $" + o.balance.toFixed(2)
        );
      }).join("\n----\n");
      div.onclick = () => {
        alert("Booth " + b.label + "\n" + info);
      }
    } else {
      div.onclick = () => {
        alert("Booth " + b.label + "\nVacant");
      }
    }

    ctn.appendChild(div);
  });

  applyScaling();
}

function applyScaling() {
  const ctn = document.getElementById("mapContainer");
  const wrapper = document.getElementById("mapWrapper");
  const pageContent = document.querySelector(".pageContent");
  const availableWidth = pageContent.clientWidth;

  if (isRotated) {
    // Rotated 90deg: the original height becomes the visible width.
    const scale = availableWidth / planeHeight;

    const visibleWidth = availableWidth;
    const visibleHeight = planeWidth * scale;

    wrapper.style.width = visibleWidth + "px";
    wrapper.style.height = visibleHeight + "px";
    wrapper.style.position = "relative";

    ctn.style.position = "absolute";
    ctn.style.left = "50%";
    ctn.style.top = "50%";
    ctn.style.transformOrigin = "center center";
    ctn.style.transform = "translate(-50%, -50%) rotate(90deg) scale(" + scale + ")";
  } else {
    const scale = Math.min(1, availableWidth / planeWidth);

    wrapper.style.width = (planeWidth * scale) + "px";
    wrapper.style.height = (planeHeight * scale) + "px";
    wrapper.style.position = "relative";

    ctn.style.position = "relative";
    ctn.style.left = "0";
    ctn.style.top = "0";
    ctn.style.transformOrigin = "top left";
    ctn.style.transform = "scale(" + scale + ")";
  }
}

function toggleRotation() {
  isRotated = !isRotated;
  applyScaling();
}

window.onload = initMap;
window.onresize = applyScaling;
"##;

pub fn map_page(vm: &MapVm) -> Markup {
    let title = format!("{} Rent Collection Map", vm.property_name);

    let booth_json = serde_json::to_string(&vm.booths).unwrap_or_else(|_| "[]".to_string());
    let script = format!(
        "let isRotated = false;\nlet planeWidth = {};\nlet planeHeight = {};\nconst boothData = {};\n{}",
        vm.plane_width, vm.plane_height, booth_json, MAP_JS
    );

    page_layout(
        &title,
        MAP_CSS,
        html! {
            h1 { (title) }

            @if !vm.booths.is_empty() {
                div class="pageContent" {
                    div class="map-controls" {
                        a href="/leases" { button { "Lease Data" } }
                        button onclick="toggleRotation()" { "Rotate Map" }
                    }
                    div id="mapWrapper" {
                        div
                            id="mapContainer"
                            style=(format!("width:{}px; height:{}px;", vm.plane_width, vm.plane_height))
                        {}
                    }
                }

                div class="legend" {
                    (legend_item(BoothColor::Storage, "Storage",
                        "Storage - Space rented by vendors for dry storage of goods and equipment."))
                    (legend_item(BoothColor::Pantry, "Pantry",
                        "Pantry - Space rented by food truck vendors for dry, cold, wet storage. Some have walk in freezers, coolers. Some have offices."))
                    (legend_item(BoothColor::Office, "Office",
                        "Office Space - Real built out offices near main management offices"))
                    (legend_item(BoothColor::Kitchen, "Kitchen",
                        "Kitchen - Areas used by food operators to prepare or store food."))
                    @if vm.scheme == PrefixScheme::Extended {
                        (legend_item(BoothColor::StorageExt, "Storage X",
                            "Extended storage - larger storage spaces with their own access."))
                        (legend_item(BoothColor::PantryExt, "Pantry X",
                            "Extended pantry - walk-in pantry spaces."))
                        (legend_item(BoothColor::KitchenExt, "Kitchen X",
                            "Extended kitchen - full prep kitchens."))
                        (legend_item(BoothColor::OfficeExt, "Office X",
                            "Extended office - multi-room office suites."))
                    }
                    (legend_item(BoothColor::Vacant, "Vacant",
                        "Vacant - This booth is currently unoccupied or empty."))
                    (legend_item(BoothColor::PastDue, "Past Due",
                        "Past Due - Occupant owes rent; behind on payments."))
                    (legend_item(BoothColor::OnTime, "On Time $0",
                        "On Time $0 - Occupant is fully paid up."))
                    (legend_item(BoothColor::CompanyStorage, "Company Storage",
                        "Company Storage - Space used as company storage to store operation items like stages and other misc equipment"))

                    div class="legend-item legend-info" {
                        span { "Occupancy: " (format!("{:.1}", vm.stats.occupancy_pct)) "%" }
                        span { "Rent Collection: " (format!("{:.1}", vm.stats.rent_collection_pct)) "%" }
                    }
                }

                script { (PreEscaped(script)) }
            } @else {
                p style="margin:20px;" { "No map layout or no booths found." }
            }
        },
    )
}

fn legend_item(color: BoothColor, label: &str, blurb: &str) -> Markup {
    html! {
        div class="legend-item" onclick=(format!("alert('{blurb}')")) {
            div class="color-box" style=(format!("background:{};", color.hex())) {}
            span { (label) }
        }
    }
}
