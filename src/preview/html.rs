//! Single-file HTML page for the preview server.

/// Preview page served at `/`.
///
/// Loads the current rendering from `/svg`, relays pointer events over the
/// WebSocket, and swaps the scene in place whenever a new frame arrives.
/// Event listeners are delegated to the container so they survive scene
/// replacement.
pub const PREVIEW_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Turkiye Map Preview</title>
    <style>
        * {
            box-sizing: border-box;
            margin: 0;
            padding: 0;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #1a1a2e;
            color: #eee;
            min-height: 100vh;
            display: flex;
            flex-direction: column;
        }

        .header {
            background: #16213e;
            padding: 12px 20px;
            display: flex;
            align-items: center;
            justify-content: space-between;
            border-bottom: 1px solid #0f3460;
        }

        .title {
            font-size: 18px;
            font-weight: 600;
            color: #e94560;
        }

        .connection-status {
            font-size: 13px;
            color: #aaa;
        }

        .connection-status.connected { color: #4ade80; }
        .connection-status.disconnected { color: #f87171; }

        #map {
            flex: 1;
            padding: 20px;
            max-width: 1100px;
            width: 100%;
            margin: 0 auto;
        }

        .status-bar {
            background: #16213e;
            border-top: 1px solid #0f3460;
            padding: 10px 20px;
            font-size: 14px;
            display: flex;
            gap: 24px;
        }

        .status-bar .label { color: #888; margin-right: 6px; }
    </style>
</head>
<body>
    <div class="header">
        <div class="title">Turkiye Map Preview</div>
        <div id="connection" class="connection-status">connecting...</div>
    </div>
    <div id="map"></div>
    <div class="status-bar">
        <span><span class="label">hover</span><span id="hovered">-</span></span>
        <span><span class="label">last click</span><span id="clicked">-</span></span>
    </div>
    <script>
        const mapEl = document.getElementById('map');
        const connectionEl = document.getElementById('connection');
        const hoveredEl = document.getElementById('hovered');
        const clickedEl = document.getElementById('clicked');

        let ws = null;
        let current = null;

        function send(kind, id) {
            if (ws && ws.readyState === WebSocket.OPEN) {
                ws.send(JSON.stringify({ kind, id }));
            }
        }

        function cityLabel(city) {
            return city ? city.name + ' (' + city.plateNumber + ')' : '-';
        }

        function connect() {
            ws = new WebSocket('ws://' + location.host + '/ws');
            ws.onopen = () => {
                connectionEl.textContent = 'connected';
                connectionEl.className = 'connection-status connected';
            };
            ws.onclose = () => {
                connectionEl.textContent = 'disconnected - retrying';
                connectionEl.className = 'connection-status disconnected';
                setTimeout(connect, 1000);
            };
            ws.onmessage = (msg) => {
                const frame = JSON.parse(msg.data);
                if (frame.kind === 'scene') {
                    mapEl.innerHTML = frame.svg;
                } else if (frame.kind === 'hover') {
                    hoveredEl.textContent = cityLabel(frame.city);
                } else if (frame.kind === 'click') {
                    clickedEl.textContent = cityLabel(frame.city);
                }
            };
        }

        // Delegated listeners: the scene markup is replaced wholesale, so
        // listeners live on the container, not on the province groups.
        mapEl.addEventListener('pointerover', (e) => {
            const g = e.target.closest('g[id]');
            if (g && g !== current) {
                if (current) send('leave', current.id);
                current = g;
                send('enter', g.id);
            }
        });
        mapEl.addEventListener('pointerout', (e) => {
            const g = e.target.closest('g[id]');
            if (g && g === current && !g.contains(e.relatedTarget)) {
                current = null;
                send('leave', g.id);
            }
        });
        mapEl.addEventListener('click', (e) => {
            const g = e.target.closest('g[id]');
            if (g) send('click', g.id);
        });

        fetch('/svg')
            .then((r) => r.text())
            .then((svg) => { mapEl.innerHTML = svg; });
        connect();
    </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_wires_the_websocket_routes() {
        assert!(PREVIEW_HTML.contains("'/ws'"));
        assert!(PREVIEW_HTML.contains("fetch('/svg')"));
    }

    #[test]
    fn page_sends_all_three_event_kinds() {
        for kind in ["enter", "leave", "click"] {
            assert!(PREVIEW_HTML.contains(&format!("send('{kind}'")), "missing {kind}");
        }
    }
}
