//! Общие типы конвейера генерации каталога: доменные записи и DTO use case'ов.

pub mod domain;
pub mod usecases;
