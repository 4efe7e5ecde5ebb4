//! View skeletons.
//!
//! The generated views are Askama templates for the target project, so the
//! expressions meant for Askama are written as `\{{ .. }}` — handlebars
//! strips the escape and leaves the braces in place.

/// Skeleton for the list view, with optional filter/search partials, bulk
/// delete checkboxes and pagination controls.
pub const VIEW_INDEX: &str = r##"{% extends "{{base_template}}" %}

{% block title %}{{plural_title}}{% endblock %}

{% block content %}
<div class="max-w-5xl mx-auto px-4 py-8">
    <div class="flex items-center justify-between mb-6">
        <h1 class="text-3xl font-bold text-gray-900">{{plural_title}}</h1>
{{#if with_write}}
        <a href="/{{route_prefix}}/new" class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700">New {{humanize_lc entity_name}}</a>
{{/if}}
    </div>

{{#if filter_form}}
    {% include "{{entity_snake}}/_filter.html" %}
{{/if}}
{{#if filter_input}}
    {% include "{{entity_snake}}/_search.html" %}
{{/if}}
{{#if with_bulk}}
    <form method="post" action="/{{route_prefix}}/bulk-delete">
{{/if}}
    <table class="min-w-full divide-y divide-gray-200">
        <thead>
            <tr>
{{#if with_bulk}}
                <th class="px-3 py-2"></th>
{{/if}}
{{#each fields}}
                <th class="px-3 py-2 text-left text-sm font-semibold text-gray-700">{{humanize_uc name}}</th>
{{/each}}
                <th class="px-3 py-2"></th>
            </tr>
        </thead>
        <tbody class="divide-y divide-gray-100">
            {% for item in items %}
            <tr>
{{#if with_bulk}}
                <td class="px-3 py-2"><input type="checkbox" name="ids" value="\{{ item.id }}"></td>
{{/if}}
{{#each fields}}
                <td class="px-3 py-2 text-sm text-gray-600">{{value_expr}}</td>
{{/each}}
                <td class="px-3 py-2 text-right text-sm whitespace-nowrap">
{{#if with_show}}
                    <a href="/{{route_prefix}}/\{{ item.id }}" class="text-blue-600 hover:underline">Show</a>
{{/if}}
{{#if with_write}}
                    <a href="/{{route_prefix}}/\{{ item.id }}/edit" class="text-blue-600 hover:underline">Edit</a>
{{/if}}
                </td>
            </tr>
            {% endfor %}
        </tbody>
    </table>
{{#if with_bulk}}
        <button type="submit" class="mt-4 px-4 py-2 bg-red-600 text-white rounded hover:bg-red-700" onclick="return confirm('Delete the selected {{humanize_lc entity_plural}}?')">Delete selected</button>
    </form>
{{/if}}

    <nav class="mt-6 flex items-center justify-between text-sm text-gray-600">
        {% if page > 1 %}<a href="?page=\{{ page - 1 }}" class="text-blue-600 hover:underline">Previous</a>{% endif %}
        <span>Page \{{ page }} of \{{ page_count }}</span>
        {% if page < page_count %}<a href="?page=\{{ page + 1 }}" class="text-blue-600 hover:underline">Next</a>{% endif %}
    </nav>
</div>
{% endblock %}
"##;

/// Skeleton for the show view: one definition row per field.
pub const VIEW_SHOW: &str = r##"{% extends "{{base_template}}" %}

{% block title %}{{title}}{% endblock %}

{% block content %}
<div class="max-w-3xl mx-auto px-4 py-8">
    <h1 class="text-3xl font-bold text-gray-900 mb-6">{{title}}</h1>

    <dl class="divide-y divide-gray-100">
{{#each fields}}
        <div class="py-3 grid grid-cols-3 gap-4">
            <dt class="text-sm font-medium text-gray-500">{{humanize_uc name}}</dt>
            <dd class="col-span-2 text-sm text-gray-900">{{value_expr}}</dd>
        </div>
{{/each}}
    </dl>

    <div class="mt-6 flex items-center gap-3">
        <a href="/{{route_prefix}}" class="text-blue-600 hover:underline">Back to list</a>
{{#if with_write}}
        <a href="/{{route_prefix}}/\{{ item.id }}/edit" class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700">Edit</a>
        <form method="post" action="/{{route_prefix}}/\{{ item.id }}/delete" onsubmit="return confirm('Delete this {{humanize_lc entity_name}}?')">
            <button type="submit" class="px-4 py-2 bg-red-600 text-white rounded hover:bg-red-700">Delete</button>
        </form>
{{/if}}
    </div>
</div>
{% endblock %}
"##;

/// Skeleton for the new view, wrapping the shared form partial.
pub const VIEW_NEW: &str = r##"{% extends "{{base_template}}" %}

{% block title %}New {{humanize_lc entity_name}}{% endblock %}

{% block content %}
<div class="max-w-3xl mx-auto px-4 py-8">
    <h1 class="text-3xl font-bold text-gray-900 mb-6">New {{humanize_lc entity_name}}</h1>

    <form method="post" action="/{{route_prefix}}">
        {% include "{{entity_snake}}/_form.html" %}
        <div class="mt-6 flex items-center gap-3">
            <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700">Create</button>
            <a href="/{{route_prefix}}" class="text-blue-600 hover:underline">Cancel</a>
        </div>
    </form>
</div>
{% endblock %}
"##;

/// Skeleton for the edit view, wrapping the shared form partial.
pub const VIEW_EDIT: &str = r##"{% extends "{{base_template}}" %}

{% block title %}Edit {{humanize_lc entity_name}}{% endblock %}

{% block content %}
<div class="max-w-3xl mx-auto px-4 py-8">
    <h1 class="text-3xl font-bold text-gray-900 mb-6">Edit {{humanize_lc entity_name}}</h1>

    <form method="post" action="/{{route_prefix}}/\{{ item.id }}/edit">
        {% include "{{entity_snake}}/_form.html" %}
        <div class="mt-6 flex items-center gap-3">
            <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700">Update</button>
            <a href="/{{route_prefix}}" class="text-blue-600 hover:underline">Cancel</a>
        </div>
    </form>
</div>
{% endblock %}
"##;

/// Skeleton for the `_form.html` partial: one labelled control per field.
pub const VIEW_FORM: &str = r##"<div class="space-y-4">
{{#each fields}}
    <div>
        <label for="{{name}}" class="block text-sm font-medium text-gray-700">{{humanize_uc name}}</label>
{{#if is_textarea}}
        <textarea id="{{name}}" name="{{name}}" rows="6" class="mt-1 block w-full rounded border-gray-300"></textarea>
{{/if}}
{{#if is_checkbox}}
        <input type="checkbox" id="{{name}}" name="{{name}}" value="true" class="mt-1 rounded border-gray-300">
{{/if}}
{{#if is_input}}
        <input type="{{input_kind}}" id="{{name}}" name="{{name}}" class="mt-1 block w-full rounded border-gray-300">
{{/if}}
    </div>
{{/each}}
</div>
"##;

/// Skeleton for the `_filter.html` partial: a GET form with one optional
/// criterion per field.
pub const VIEW_FILTER: &str = r##"<form method="get" action="/{{route_prefix}}" class="mb-6 grid grid-cols-1 sm:grid-cols-3 gap-4 items-end">
{{#each fields}}
    <div>
        <label for="filter_{{name}}" class="block text-sm font-medium text-gray-700">{{humanize_uc name}}</label>
        <input type="{{input_kind}}" id="filter_{{name}}" name="{{name}}" class="mt-1 block w-full rounded border-gray-300">
    </div>
{{/each}}
    <div class="flex items-center gap-2">
        <button type="submit" class="px-4 py-2 bg-gray-800 text-white rounded hover:bg-gray-900">Filter</button>
        <a href="/{{route_prefix}}" class="text-blue-600 hover:underline">Reset</a>
    </div>
</form>
"##;

/// Skeleton for the `_search.html` partial: the single multi-search input.
pub const VIEW_SEARCH: &str = r##"<form method="get" action="/{{route_prefix}}" class="mb-6 flex items-center gap-2">
    <input type="search" name="q" placeholder="Search {{humanize_lc entity_plural}}..." class="block w-full max-w-md rounded border-gray-300">
    <button type="submit" class="px-4 py-2 bg-gray-800 text-white rounded hover:bg-gray-900">Search</button>
</form>
"##;
