// Author: kelexine (https://github.com/kelexine)
// export/html.rs - Self-contained HTML dashboard export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::{Value, json};

use super::json::{Summary, report_value};
use crate::aggregate::Aggregate;
use crate::scan::ScanOutcome;

/// Report data injected into the page: the JSON report plus metadata.
pub fn dashboard_data<T>(outcome: &ScanOutcome<T>, title: &str) -> Value
where
    T: Aggregate + Summary,
    T::Total: Summary,
{
    let mut data = report_value(outcome, true);
    let file_count = data
        .get("files")
        .and_then(Value::as_object)
        .map(|m| m.len())
        .unwrap_or(1);
    data["metadata"] = json!({
        "title": title,
        "timestamp": Utc::now().to_rfc3339(),
        "file_count": file_count,
        "generator": concat!("jsmetrics v", env!("CARGO_PKG_VERSION")),
    });
    data
}

pub fn export_html<T>(outcome: &ScanOutcome<T>, path: &Path, title: &str) -> Result<()>
where
    T: Aggregate + Summary,
    T::Total: Summary,
{
    let json_data = serde_json::to_string(&dashboard_data(outcome, title))?;
    let html_content = format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>jsmetrics | {title}</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>
        :root {{
            --bg: #0f172a;
            --card-bg: #1e293b;
            --text-primary: #f8fafc;
            --text-secondary: #94a3b8;
            --accent: #facc15;
            --border: #334155;
        }}

        * {{ box-sizing: border-box; margin: 0; padding: 0; }}
        body {{
            font-family: 'Inter', -apple-system, sans-serif;
            background-color: var(--bg);
            color: var(--text-primary);
            line-height: 1.5;
            padding: 2rem;
        }}

        .container {{ max-width: 1200px; margin: 0 auto; }}

        header {{
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-bottom: 2rem;
            padding-bottom: 1rem;
            border-bottom: 1px solid var(--border);
        }}

        h1 {{ font-size: 1.5rem; font-weight: 700; color: var(--accent); }}
        .subtitle, .timestamp {{ font-size: 0.875rem; color: var(--text-secondary); }}

        .stats-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
            gap: 1rem;
            margin-bottom: 2rem;
        }}

        .stat-card {{
            background: var(--card-bg);
            padding: 1.25rem;
            border-radius: 0.75rem;
            border: 1px solid var(--border);
            text-align: center;
        }}

        .stat-value {{ font-size: 1.75rem; font-weight: 800; display: block; word-break: break-word; }}
        .stat-label {{ font-size: 0.8rem; color: var(--text-secondary); text-transform: uppercase; letter-spacing: 0.05em; }}

        .chart-container, .table-container {{
            background: var(--card-bg);
            padding: 1.5rem;
            border-radius: 0.75rem;
            border: 1px solid var(--border);
            margin-bottom: 2rem;
        }}
        .chart-container {{ min-height: 320px; }}
        .table-container {{ overflow-x: auto; }}

        table {{ width: 100%; border-collapse: collapse; }}
        th {{ text-align: left; color: var(--text-secondary); font-size: 0.875rem; border-bottom: 1px solid var(--border); padding: 0.75rem 1rem; }}
        td {{ padding: 0.75rem 1rem; border-bottom: 1px solid var(--border); font-size: 0.9375rem; }}
        tr:last-child td {{ border-bottom: none; }}

        .search-container {{ margin-bottom: 1rem; }}
        input[type="text"] {{
            width: 100%;
            background: var(--bg);
            border: 1px solid var(--border);
            color: white;
            padding: 0.5rem 1rem;
            border-radius: 0.5rem;
            outline: none;
        }}
        input[type="text"]:focus {{ border-color: var(--accent); }}
    </style>
</head>
<body>
    <div class="container">
        <header>
            <div>
                <h1 id="title"></h1>
                <div id="target" class="subtitle"></div>
            </div>
            <div id="timestamp" class="timestamp"></div>
        </header>

        <div id="stats" class="stats-grid"></div>

        <div class="chart-container">
            <canvas id="fileChart"></canvas>
        </div>

        <div class="table-container">
            <div class="search-container">
                <input type="text" id="fileSearch" placeholder="Search files...">
            </div>
            <table>
                <thead><tr id="fileTableHead"></tr></thead>
                <tbody id="fileTableBody"></tbody>
            </table>
        </div>
    </div>

    <script>
        const reportData = {data};

        const isScalar = v => typeof v === 'number' || typeof v === 'string' || typeof v === 'boolean';
        const label = k => k.replace(/_/g, ' ');
        const show = v => typeof v === 'number' ? v.toLocaleString() : String(v);

        document.getElementById('title').textContent = reportData.metadata.title;
        document.getElementById('target').textContent = reportData.directory;
        document.getElementById('timestamp').textContent = 'Generated: ' + new Date(reportData.metadata.timestamp).toLocaleString();

        // Summary cards
        const stats = document.getElementById('stats');
        const summary = reportData.summary || {{}};
        Object.entries(summary).filter(([, v]) => isScalar(v)).forEach(([k, v]) => {{
            const card = document.createElement('div');
            card.className = 'stat-card';
            card.innerHTML = `<span class="stat-value">${{show(v)}}</span><span class="stat-label">${{label(k)}}</span>`;
            stats.appendChild(card);
        }});

        // Per-file data
        const files = Object.entries(reportData.files || {{}});
        const columns = files.length > 0
            ? Object.keys(files[0][1]).filter(k => isScalar(files[0][1][k]))
            : [];
        const chartKey = columns.find(k => typeof files[0][1][k] === 'number');

        if (chartKey) {{
            const top = files.slice().sort((a, b) => b[1][chartKey] - a[1][chartKey]).slice(0, 15);
            new Chart(document.getElementById('fileChart'), {{
                type: 'bar',
                data: {{
                    labels: top.map(([name]) => name),
                    datasets: [{{ data: top.map(([, f]) => f[chartKey]), backgroundColor: '#facc15', borderWidth: 0 }}]
                }},
                options: {{
                    maintainAspectRatio: false,
                    plugins: {{
                        legend: {{ display: false }},
                        title: {{ display: true, text: 'Top files by ' + label(chartKey), color: '#f8fafc', font: {{ size: 16 }} }}
                    }},
                    scales: {{ x: {{ ticks: {{ color: '#94a3b8' }} }}, y: {{ ticks: {{ color: '#94a3b8' }} }} }}
                }}
            }});
        }}

        const head = document.getElementById('fileTableHead');
        ['file', ...columns].forEach(c => {{
            const th = document.createElement('th');
            th.textContent = label(c);
            head.appendChild(th);
        }});

        const tableBody = document.getElementById('fileTableBody');
        function renderTable(filter = '') {{
            tableBody.innerHTML = '';
            files
                .filter(([name]) => name.toLowerCase().includes(filter.toLowerCase()))
                .forEach(([name, f]) => {{
                    const row = document.createElement('tr');
                    const cells = [name, ...columns.map(c => show(f[c]))];
                    cells.forEach(text => {{
                        const td = document.createElement('td');
                        td.textContent = text;
                        row.appendChild(td);
                    }});
                    tableBody.appendChild(row);
                }});
        }}

        document.getElementById('fileSearch').addEventListener('input', (e) => renderTable(e.target.value));
        renderTable();
    </script>
</body>
</html>
"#, title = title, data = json_data);

    let f = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(f);
    writer.write_all(html_content.as_bytes())?;

    eprintln!("[SUCCESS] Exported HTML Visual Report → {}", path.display());
    Ok(())
}
