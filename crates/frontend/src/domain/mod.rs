pub mod a001_form_template;
