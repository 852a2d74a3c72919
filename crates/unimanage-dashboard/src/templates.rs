//! HTML templates for the dashboard.
//!
//! Uses a simple template approach with Tailwind CSS and HTMX.

use unimanage_core::User;
use unimanage_core::visibility::{self, NavigationEntry, StatTile, Trend};

/// Everything the page chrome needs to know about the request.
pub struct Shell<'a> {
    pub institution: &'a str,
    pub user: &'a User,
    /// Sidebar entries, already filtered to the user's role.
    pub navigation: &'a [&'static NavigationEntry],
    pub current_path: &'a str,
}

const HEAD: &str = r##"<meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <script src="https://cdn.tailwindcss.com"></script>
    <script>
        tailwind.config = {
            darkMode: 'class',
            theme: {
                extend: {
                    colors: {
                        primary: {
                            50: '#eff6ff',
                            100: '#dbeafe',
                            200: '#bfdbfe',
                            300: '#93c5fd',
                            400: '#60a5fa',
                            500: '#3b82f6',
                            600: '#2563eb',
                            700: '#1d4ed8',
                            800: '#1e40af',
                            900: '#1e3a8a',
                        }
                    }
                }
            }
        }
    </script>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script defer src="https://unpkg.com/alpinejs@3.x.x/dist/cdn.min.js"></script>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
    <style>
        [x-cloak] { display: none !important; }
        .htmx-indicator { display: none; }
        .htmx-request .htmx-indicator { display: inline-block; }
        .htmx-request.htmx-indicator { display: inline-block; }
    </style>"##;

/// Base HTML layout wrapper for signed-in pages.
pub fn layout(title: &str, shell: &Shell<'_>, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en" x-data="{{
    darkMode: localStorage.getItem('darkMode') === 'true',
    sidebarOpen: true
}}" :class="{{ 'dark': darkMode }}">
<head>
    {HEAD}
    <title>{title} - {institution}</title>
</head>
<body class="bg-gray-50 dark:bg-gray-900 min-h-screen">
    {NAV}

    <div class="flex">
        {SIDEBAR}

        <main class="flex-1 p-6 lg:p-8">
            <div class="max-w-7xl mx-auto">
                {content}
            </div>
        </main>
    </div>

    {TOAST}

    <script>
        document.body.addEventListener('htmx:afterSwap', function(evt) {{
            if (typeof Alpine !== 'undefined') {{
                Alpine.initTree(evt.detail.target);
            }}
        }});

        function showToast(message, type = 'success') {{
            const toast = document.getElementById('toast');
            const toastMessage = document.getElementById('toast-message');
            toastMessage.textContent = message;
            toast.className = toast.className.replace(/bg-\w+-500/, type === 'error' ? 'bg-red-500' : 'bg-green-500');
            toast.classList.remove('hidden');
            setTimeout(() => toast.classList.add('hidden'), 3000);
        }}
    </script>
</body>
</html>"##,
        title = escape(title),
        institution = escape(shell.institution),
        NAV = nav_template(shell),
        SIDEBAR = sidebar_template(shell),
        TOAST = toast_template(),
    )
}

/// Standalone page without the signed-in chrome (login).
pub fn bare_layout(title: &str, body_class: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en" x-data="{{
    darkMode: localStorage.getItem('darkMode') === 'true'
}}" :class="{{ 'dark': darkMode }}">
<head>
    {HEAD}
    <title>{title}</title>
</head>
<body class="{body_class}">
    {content}
</body>
</html>"##,
        title = escape(title),
    )
}

fn nav_template(shell: &Shell<'_>) -> String {
    format!(
        r##"<nav class="bg-primary-600 dark:bg-primary-900 text-white px-4 py-3 sticky top-0 z-50 shadow-lg">
        <div class="flex items-center justify-between">
            <div class="flex items-center gap-4">
                <button @click="sidebarOpen = !sidebarOpen" class="p-2 hover:bg-primary-700 rounded-lg lg:hidden">
                    <i class="fas fa-bars"></i>
                </button>
                <a href="/" class="flex items-center gap-2">
                    <i class="fas fa-graduation-cap text-xl"></i>
                    <span class="font-semibold">{institution}</span>
                    <span class="text-sm bg-primary-500 dark:bg-primary-700 px-2 py-1 rounded">University Management System</span>
                </a>
            </div>
            <div class="flex items-center gap-4">
                <button class="relative p-2 hover:bg-primary-700 rounded-lg">
                    <i class="fas fa-bell"></i>
                    <span class="absolute top-1 right-1 w-2 h-2 bg-red-400 rounded-full"></span>
                </button>
                <button @click="darkMode = !darkMode; localStorage.setItem('darkMode', darkMode)"
                        class="p-2 hover:bg-primary-700 rounded-lg">
                    <i class="fas" :class="darkMode ? 'fa-sun' : 'fa-moon'"></i>
                </button>
                <div class="w-8 h-8 rounded-full bg-white/20 flex items-center justify-center text-sm font-semibold">{initials}</div>
            </div>
        </div>
    </nav>"##,
        institution = escape(shell.institution),
        initials = escape(&shell.user.initials()),
    )
}

fn sidebar_template(shell: &Shell<'_>) -> String {
    let links: String = shell
        .navigation
        .iter()
        .map(|entry| {
            let state = if visibility::is_active_route(entry.href, shell.current_path) {
                "bg-primary-50 dark:bg-primary-900/50 text-primary-600 dark:text-primary-400"
            } else {
                "text-gray-700 dark:text-gray-200"
            };
            format!(
                r##"<a href="{href}" class="flex items-center gap-3 px-4 py-3 {state} hover:bg-primary-50 dark:hover:bg-primary-900/50 rounded-lg transition-colors">
                    <i class="fas fa-{icon} w-5"></i>
                    <span>{label}</span>
                </a>"##,
                href = entry.href,
                icon = entry.icon,
                label = escape(entry.label),
            )
        })
        .collect();

    let user = shell.user;
    format!(
        r##"<aside class="w-64 bg-white dark:bg-gray-800 border-r border-gray-200 dark:border-gray-700 min-h-[calc(100vh-56px)] transition-all duration-300 flex flex-col"
              :class="{{ '-ml-64': !sidebarOpen }}"
              x-cloak>
            <nav class="p-4 space-y-2 flex-1">
                {links}
            </nav>
            <div class="p-4 border-t border-gray-200 dark:border-gray-700">
                <div class="flex items-center gap-3 mb-3">
                    <div class="w-10 h-10 rounded-full bg-primary-100 dark:bg-primary-900/30 text-primary-600 flex items-center justify-center font-semibold">{initials}</div>
                    <div class="min-w-0">
                        <p class="text-sm font-medium text-gray-900 dark:text-white truncate">{name}</p>
                        <p class="text-xs text-gray-500 dark:text-gray-400">{role}</p>
                    </div>
                </div>
                <form method="POST" action="/logout">
                    <button type="submit" class="w-full flex items-center gap-2 px-4 py-2 text-sm text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 rounded-lg transition-colors">
                        <i class="fas fa-sign-out-alt"></i> Logout
                    </button>
                </form>
            </div>
        </aside>"##,
        initials = escape(&user.initials()),
        name = escape(&user.name),
        role = user.role.label(),
    )
}

fn toast_template() -> &'static str {
    r##"<div id="toast" class="hidden fixed bottom-4 right-4 bg-green-500 text-white px-6 py-3 rounded-lg shadow-lg z-50 transition-all">
        <span id="toast-message"></span>
    </div>"##
}

/// Card component.
pub fn card(title: &str, content: &str) -> String {
    format!(
        r##"<div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 overflow-hidden">
            <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{title}</h3>
            </div>
            <div class="p-6">
                {content}
            </div>
        </div>"##,
        title = escape(title),
    )
}

/// Stats card component.
pub fn stats_card(title: &str, value: &str, icon: &str, color: &str) -> String {
    format!(
        r##"<div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 p-6">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{title}</p>
                    <p class="text-2xl font-bold text-gray-900 dark:text-white mt-1">{value}</p>
                </div>
                <div class="w-12 h-12 rounded-full bg-{color}-100 dark:bg-{color}-900/30 flex items-center justify-center">
                    <i class="fas fa-{icon} text-{color}-500 text-xl"></i>
                </div>
            </div>
        </div>"##,
        title = escape(title),
        value = escape(value),
    )
}

/// Stat tile with a month-over-month change indicator.
pub fn stat_tile(tile: &StatTile) -> String {
    let (arrow, color) = match tile.trend() {
        Trend::Up => ("arrow-up", "green"),
        Trend::Down => ("arrow-down", "red"),
        Trend::Flat => ("minus", "gray"),
    };
    format!(
        r##"<div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 p-6">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{title}</p>
                    <p class="text-2xl font-bold text-gray-900 dark:text-white mt-1">{value}</p>
                </div>
                <div class="w-12 h-12 rounded-full bg-primary-100 dark:bg-primary-900/30 flex items-center justify-center">
                    <i class="fas fa-{icon} text-primary-500 text-xl"></i>
                </div>
            </div>
            <p class="mt-3 text-xs text-{color}-600 dark:text-{color}-400">
                <i class="fas fa-{arrow}"></i> {change} <span class="text-gray-500 dark:text-gray-400">from last month</span>
            </p>
        </div>"##,
        title = escape(tile.title),
        value = escape(tile.value),
        icon = tile.icon,
        change = escape(tile.change),
    )
}

/// Button component.
pub fn button(text: &str, variant: &str, attrs: &str) -> String {
    let (bg, hover, text_color) = match variant {
        "primary" => ("bg-primary-600", "hover:bg-primary-700", "text-white"),
        "secondary" => ("bg-gray-200 dark:bg-gray-700", "hover:bg-gray-300 dark:hover:bg-gray-600", "text-gray-700 dark:text-gray-200"),
        "danger" => ("bg-red-600", "hover:bg-red-700", "text-white"),
        "success" => ("bg-green-600", "hover:bg-green-700", "text-white"),
        _ => ("bg-gray-200", "hover:bg-gray-300", "text-gray-700"),
    };

    format!(
        r##"<button class="{bg} {hover} {text_color} px-4 py-2 rounded-lg font-medium transition-colors disabled:opacity-50" {attrs}>{text}</button>"##
    )
}

/// Input field component.
pub fn input(name: &str, label: &str, input_type: &str, value: &str, placeholder: &str) -> String {
    format!(
        r##"<div class="space-y-1">
            <label for="{name}" class="block text-sm font-medium text-gray-700 dark:text-gray-300">{label}</label>
            <input type="{input_type}" name="{name}" id="{name}" value="{value}" placeholder="{placeholder}"
                   class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500 focus:border-primary-500">
        </div>"##,
        value = escape(value),
    )
}

/// Search box that swaps `target` with the response of `endpoint` as the
/// user types.
pub fn search_box(endpoint: &str, target: &str, query: &str, placeholder: &str) -> String {
    format!(
        r##"<div class="relative mb-4">
            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <i class="fas fa-search text-gray-400"></i>
            </div>
            <input type="search" name="q" value="{query}" placeholder="{placeholder}" autocomplete="off"
                   hx-get="{endpoint}" hx-trigger="keyup changed, search" hx-target="#{target}" hx-swap="innerHTML"
                   class="w-full pl-10 pr-10 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500 focus:border-primary-500">
            <div class="absolute inset-y-0 right-0 pr-3 flex items-center htmx-indicator">
                <i class="fas fa-circle-notch fa-spin text-gray-400"></i>
            </div>
        </div>"##,
        query = escape(query),
        placeholder = escape(placeholder),
    )
}

/// Badge component.
pub fn badge(text: &str, color: &str) -> String {
    format!(
        r##"<span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-{color}-100 dark:bg-{color}-900/30 text-{color}-800 dark:text-{color}-300">{text}</span>"##,
        text = escape(text),
    )
}

/// Table component. Cells are inserted as-is.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let headers_html: String = headers
        .iter()
        .map(|h| format!(r#"<th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{h}</th>"#))
        .collect();

    let rows_html: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| format!(r#"<td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-gray-100">{cell}</td>"#))
                .collect();
            format!(r#"<tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50">{cells}</tr>"#)
        })
        .collect();

    format!(
        r##"<div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-800">
                    <tr>{headers_html}</tr>
                </thead>
                <tbody class="bg-white dark:bg-gray-900 divide-y divide-gray-200 dark:divide-gray-700">
                    {rows_html}
                </tbody>
            </table>
        </div>"##
    )
}

/// Empty state component.
pub fn empty_state(icon: &str, title: &str, description: &str, action: Option<(&str, &str)>) -> String {
    let action_html = action.map_or(String::new(), |(text, href)| {
        format!(r##"<a href="{href}" class="mt-4 inline-flex items-center gap-2 bg-primary-600 hover:bg-primary-700 text-white px-4 py-2 rounded-lg font-medium transition-colors">
            <i class="fas fa-arrow-left"></i> {text}
        </a>"##)
    });

    format!(
        r##"<div class="text-center py-12">
            <i class="fas fa-{icon} text-4xl text-gray-400 dark:text-gray-600 mb-4"></i>
            <h3 class="text-lg font-medium text-gray-900 dark:text-white">{title}</h3>
            <p class="mt-1 text-gray-500 dark:text-gray-400">{description}</p>
            {action_html}
        </div>"##,
        title = escape(title),
        description = escape(description),
    )
}

/// Tab container. Each tab is `(key, label, content)`.
pub fn tabs(id: &str, tabs: &[(&str, &str, String)]) -> String {
    let tab_buttons: String = tabs
        .iter()
        .map(|(key, label, _)| {
            format!(
                r##"<button @click="activeTab = '{key}'"
                        :class="{{ 'border-primary-600 text-primary-600 dark:text-primary-400': activeTab === '{key}', 'border-transparent text-gray-500 hover:text-gray-700 hover:border-gray-300': activeTab !== '{key}' }}"
                        class="px-4 py-2 border-b-2 font-medium text-sm transition-colors">
                    {label}
                </button>"##,
                label = escape(label),
            )
        })
        .collect();

    let tab_contents: String = tabs
        .iter()
        .map(|(key, _, content)| {
            format!(
                r##"<div x-show="activeTab === '{key}'" x-transition>
                    {content}
                </div>"##
            )
        })
        .collect();

    let first_key = tabs.first().map(|(k, _, _)| *k).unwrap_or("default");

    format!(
        r##"<div x-data="{{ activeTab: '{first_key}' }}" id="{id}">
            <div class="border-b border-gray-200 dark:border-gray-700 mb-4">
                <nav class="flex gap-2">
                    {tab_buttons}
                </nav>
            </div>
            <div>
                {tab_contents}
            </div>
        </div>"##
    )
}

/// Simple HTML escape function
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
